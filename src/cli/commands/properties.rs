//! Property listing commands: `list` and `show`.
//!
//! Both commands drive an [`OverviewController`] through a full fetch,
//! wait for the status to settle, and render the result. `show` also
//! exercises the selection signal the way a detail screen would.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use comfy_table::Cell;
use console::style;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::cli::output::{list_table, output, CommandOutput};
use crate::domain::models::{Config, LoadStatus, MarsProperty, PropertyFilter};
use crate::infrastructure::mars_api::MarsApiClient;
use crate::services::OverviewController;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Listing filter: rent, buy, or all
    #[arg(short, long, default_value_t = PropertyFilter::ShowAll)]
    pub filter: PropertyFilter,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing identifier
    pub id: String,

    /// Listing filter to search within: rent, buy, or all
    #[arg(short, long, default_value_t = PropertyFilter::ShowAll)]
    pub filter: PropertyFilter,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    filter: PropertyFilter,
    properties: Vec<MarsProperty>,
}

impl CommandOutput for ListOutput {
    fn to_human(&self) -> String {
        if self.properties.is_empty() {
            return format!("No listings for filter '{}'.", self.filter);
        }
        let mut table = list_table(&["id", "type", "price"]);
        for property in &self.properties {
            table.add_row(vec![
                Cell::new(&property.id),
                Cell::new(&property.property_type),
                Cell::new(property.display_price()),
            ]);
        }
        let noun = if self.properties.len() == 1 {
            "listing"
        } else {
            "listings"
        };
        format!(
            "{} {} (filter '{}'):\n{}",
            style(self.properties.len()).bold(),
            noun,
            self.filter,
            table
        )
    }
}

#[derive(Debug, Serialize)]
struct ShowOutput {
    #[serde(flatten)]
    property: MarsProperty,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let kind = if self.property.is_rental() {
            "for rent"
        } else {
            "for sale"
        };
        format!(
            "Listing {} ({})\n  Price: {}\n  Image: {}",
            style(&self.property.id).bold(),
            kind,
            self.property.display_price(),
            self.property.img_src_url
        )
    }
}

/// Run the `list` command.
pub async fn execute_list(args: ListArgs, config: &Config, json: bool) -> Result<()> {
    let (controller, status) = settled_controller(config, args.filter).await?;

    if status == LoadStatus::Error {
        bail!("fetch failed for filter '{}'; check connectivity and retry", args.filter);
    }

    let result = ListOutput {
        filter: args.filter,
        properties: controller.properties().get(),
    };
    output(&result, json);
    controller.shutdown();
    Ok(())
}

/// Run the `show` command.
pub async fn execute_show(args: ShowArgs, config: &Config, json: bool) -> Result<()> {
    let (controller, status) = settled_controller(config, args.filter).await?;

    if status == LoadStatus::Error {
        bail!("fetch failed for filter '{}'; check connectivity and retry", args.filter);
    }

    let Some(property) = controller
        .properties()
        .get()
        .into_iter()
        .find(|p| p.id == args.id)
    else {
        bail!("no listing with id '{}' under filter '{}'", args.id, args.filter);
    };

    // Drive the selection signal the way a navigating screen would:
    // select, act on the signal, then acknowledge it.
    controller.select_property(property);
    if let Some(selected) = controller.selected_property().get() {
        output(&ShowOutput { property: selected }, json);
    }
    controller.selection_consumed();
    controller.shutdown();
    Ok(())
}

/// Build a controller for the configured API and wait for its fetch to
/// settle on a terminal status.
async fn settled_controller(
    config: &Config,
    filter: PropertyFilter,
) -> Result<(OverviewController, LoadStatus)> {
    let client = Arc::new(MarsApiClient::with_config(&config.api)?);
    let controller = OverviewController::with_filter(client, filter);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let observer = controller.status();
    let handle = observer.subscribe(move |status| {
        let _ = tx.send(*status);
    });

    let mut settled = LoadStatus::Loading;
    while let Some(status) = rx.recv().await {
        if status != LoadStatus::Loading {
            settled = status;
            break;
        }
    }
    observer.unsubscribe(handle);

    Ok((controller, settled))
}
