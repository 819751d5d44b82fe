//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::arm::{ArmResource, LocalNetworkGateway, Registry};
use crate::cli::OutputFormat;
use crate::error::Result;

pub use common::escape_csv;

/// Kind-specific column shown next to the common ones
pub trait Tabular: ArmResource {
    /// Header of the kind-specific column
    const DETAIL_HEADER: &'static str;

    fn detail(&self) -> String;
}

impl Tabular for LocalNetworkGateway {
    const DETAIL_HEADER: &'static str = "Gateway / Prefixes";

    fn detail(&self) -> String {
        let address = self.gateway_address().unwrap_or("-");
        let prefixes = self.address_prefixes();
        if prefixes.is_empty() {
            address.to_string()
        } else {
            format!("{} [{}]", address, prefixes.join(" "))
        }
    }
}

impl Tabular for Registry {
    const DETAIL_HEADER: &'static str = "Login Server / SKU";

    fn detail(&self) -> String {
        format!(
            "{} ({})",
            self.login_server().unwrap_or("-"),
            self.sku_name().unwrap_or("-")
        )
    }
}

/// Flattened resource data for table and CSV output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub group: String,
    pub name: String,
    pub location: String,
    pub state: String,
    pub detail: String,
    pub id: String,
}

impl ResourceRow {
    pub fn new<T: Tabular>(resource: &T) -> Self {
        Self {
            group: resource.resource_group().unwrap_or_default().to_string(),
            name: resource.name().to_string(),
            location: resource.location().unwrap_or_default().to_string(),
            state: resource.provisioning_state().unwrap_or_default().to_string(),
            detail: resource.detail(),
            id: resource.id().to_string(),
        }
    }
}

/// Render resources in the requested format
pub fn render_resources<T>(resources: &[T], format: OutputFormat, no_header: bool) -> Result<String>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => common::to_json(resources),
        OutputFormat::Yaml => common::to_yaml(resources),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<ResourceRow> = resources.iter().map(ResourceRow::new).collect();
            Ok(if format == OutputFormat::Table {
                render_table(&rows, T::DETAIL_HEADER, no_header)
            } else {
                render_csv(&rows, no_header)
            })
        }
    }
}

/// Print resources in the requested format
pub fn output_resources<T>(resources: &[T], format: OutputFormat, no_header: bool) -> Result<()>
where
    T: Tabular + Serialize,
{
    let rendered = render_resources(resources, format, no_header)?;
    if format == OutputFormat::Table {
        println!();
    }
    println!("{}", rendered);
    Ok(())
}

fn render_table(rows: &[ResourceRow], detail_header: &str, no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "Resource Group",
            "Name",
            "Location",
            "State",
            detail_header,
        ]);
    }

    for row in rows {
        table.add_row(vec![
            &row.group,
            &row.name,
            &row.location,
            &row.state,
            &row.detail,
        ]);
    }

    let mut out = table.to_string();
    if !no_header {
        out.push_str(&format!("\n\nTotal: {} resources", rows.len()));
    }
    out
}

fn render_csv(rows: &[ResourceRow], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        lines.push("resource_group,name,location,provisioning_state,detail,id".to_string());
    }
    for row in rows {
        lines.push(format!(
            "{},{},{},{},{},{}",
            escape_csv(&row.group),
            escape_csv(&row.name),
            escape_csv(&row.location),
            escape_csv(&row.state),
            escape_csv(&row.detail),
            escape_csv(&row.id)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> LocalNetworkGateway {
        serde_json::from_value(serde_json::json!({
            "id": "/subscriptions/s/resourceGroups/rg-net/providers/Microsoft.Network/localNetworkGateways/onprem",
            "name": "onprem",
            "location": "westeurope",
            "properties": {
                "gatewayIpAddress": "203.0.113.10",
                "localNetworkAddressSpace": {"addressPrefixes": ["10.1.0.0/16", "10.2.0.0/16"]},
                "provisioningState": "Succeeded"
            }
        }))
        .unwrap()
    }

    fn registry() -> Registry {
        serde_json::from_value(serde_json::json!({
            "id": "/subscriptions/s/resourceGroups/rg-ci/providers/Microsoft.ContainerRegistry/registries/acme",
            "name": "acme",
            "sku": {"name": "Basic"},
            "properties": {"loginServer": "acme.azurecr.io"}
        }))
        .unwrap()
    }

    #[test]
    fn test_row_from_gateway() {
        let row = ResourceRow::new(&gateway());
        assert_eq!(row.group, "rg-net");
        assert_eq!(row.name, "onprem");
        assert_eq!(row.state, "Succeeded");
        assert_eq!(row.detail, "203.0.113.10 [10.1.0.0/16 10.2.0.0/16]");
    }

    #[test]
    fn test_row_from_registry_missing_fields() {
        let row = ResourceRow::new(&registry());
        assert_eq!(row.location, "");
        assert_eq!(row.state, "");
        assert_eq!(row.detail, "acme.azurecr.io (Basic)");
    }

    #[test]
    fn test_render_table_header_and_total() {
        let out = render_resources(&[gateway()], OutputFormat::Table, false).unwrap();
        assert!(out.contains("Resource Group"));
        assert!(out.contains("Gateway / Prefixes"));
        assert!(out.contains("onprem"));
        assert!(out.contains("Total: 1 resources"));

        let bare = render_resources(&[gateway()], OutputFormat::Table, true).unwrap();
        assert!(!bare.contains("Resource Group"));
        assert!(!bare.contains("Total"));
    }

    #[test]
    fn test_render_csv() {
        let out = render_resources(&[gateway()], OutputFormat::Csv, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("resource_group,name"));
        assert!(lines[1].starts_with("rg-net,onprem,westeurope,Succeeded,"));

        let empty = render_resources::<Registry>(&[], OutputFormat::Csv, true).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_render_json_keeps_model_fields() {
        let out = render_resources(&[registry()], OutputFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["properties"]["loginServer"], "acme.azurecr.io");
    }
}
