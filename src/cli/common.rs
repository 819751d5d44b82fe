//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Resource kinds the CLI can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Local network gateways (Microsoft.Network/localNetworkGateways)
    #[value(
        name = "local-network-gateways",
        alias = "lgw",
        alias = "local-network-gateway"
    )]
    LocalNetworkGateways,
    /// Container registries (Microsoft.ContainerRegistry/registries)
    #[value(name = "registries", alias = "acr", alias = "registry")]
    Registries,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindArg::LocalNetworkGateways => write!(f, "local-network-gateways"),
            KindArg::Registries => write!(f, "registries"),
        }
    }
}
