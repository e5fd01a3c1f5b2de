use crate::core::client::Operation;
use crate::domain::model::{Address, CartItem};
use crate::utils::error::{Result, TaxCloudError};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "taxcloud")]
#[command(about = "Calculate and report U.S. sales tax through TaxCloud")]
pub struct Cli {
    /// TOML 設定檔，未指定時改讀環境變數
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that the API login id and key are accepted
    Ping,
    /// Look up sales tax for a cart file
    Lookup {
        #[arg(long)]
        cart: PathBuf,
    },
    /// Report an authorized and captured order
    Capture {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        cart_id: String,
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        authorized_at: Option<String>,
        #[arg(long)]
        captured_at: Option<String>,
    },
    /// Report returned items of an order
    Return {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        cart: PathBuf,
        #[arg(long)]
        returned_at: Option<String>,
    },
}

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAULT: i32 = 1;
pub const EXIT_SERVICE_REJECTED: i32 = 2;

/// 只有狀態為 OK 且沒有任何訊息時才算成功
pub fn exit_code<O: Operation>(op: &O) -> i32 {
    let accepted = op.response().is_some_and(|r| r.is_ok());
    if accepted && op.error_messages().is_empty() {
        EXIT_OK
    } else {
        EXIT_SERVICE_REJECTED
    }
}

/// 購物車檔案 (TOML)
#[derive(Debug, Clone, Deserialize)]
pub struct CartFile {
    #[serde(default)]
    pub customer_id: String,
    pub cart_id: Option<String>,
    #[serde(default)]
    pub delivered_by_seller: bool,
    pub origin: Option<Address>,
    pub destination: Option<Address>,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TaxCloudError::Config {
            message: format!("Cart file parsing error: {}", e),
        })
    }

    /// Lookup 需要顧客與兩個地址
    pub fn lookup_parts(&self) -> Result<(&Address, &Address)> {
        if self.customer_id.trim().is_empty() {
            return Err(TaxCloudError::Validation {
                message: "customer_id cannot be empty".to_string(),
            });
        }
        let origin = self.origin.as_ref().ok_or_else(|| TaxCloudError::Validation {
            message: "origin address is required".to_string(),
        })?;
        let destination = self.destination.as_ref().ok_or_else(|| TaxCloudError::Validation {
            message: "destination address is required".to_string(),
        })?;
        origin.validate()?;
        destination.validate()?;
        Ok((origin, destination))
    }
}

impl Validate for CartFile {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(TaxCloudError::Validation {
                message: "cart has no items".to_string(),
            });
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
