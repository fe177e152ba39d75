// Core business logic module

pub mod config;
pub mod distributor;
pub mod downloader;
pub mod expand;
pub mod media_file;
pub mod purpose;
pub mod remote;
pub mod resolver;
pub mod runner;
pub mod samba;
pub mod tools;

// Re-export commonly used items
pub use config::Config;
pub use distributor::{DistributionReport, Distributor, RemoteOutcome};
pub use downloader::{sanitize_title, Downloader};
pub use expand::Variables;
pub use media_file::{MediaFile, MediaKind};
pub use purpose::Purpose;
pub use remote::{Remote, TransferMethod};
pub use resolver::{resolve, PathSource};
pub use runner::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
pub use samba::{parse_remote_path, SambaMounter, SambaPath};
