//! Subcommand handlers

use anyhow::Context;
use intermed_client::{
    RecordFilter, ScheduleQuery, ScheduleTableQuery, SessionClient, Transport,
};
use serde::Serialize;

use crate::Commands;

pub async fn run<T: Transport>(client: &mut SessionClient<T>, command: Commands) -> anyhow::Result<()> {
    let login = client.login().await.context("Login failed")?;

    match command {
        Commands::Login => print_json(&login),
        Commands::Facilities => {
            let facilities = client
                .get_facilities()
                .await
                .context("Failed to list facilities")?;
            print_json(&facilities)
        }
        Commands::Session => {
            let details = client
                .fetch_session_details()
                .await
                .context("Failed to load session record")?;
            print_json(&details)
        }
        Commands::Specialties { oid, reg_id } => {
            let specs = client
                .find_specialties(&oid, &reg_id)
                .await
                .context("Failed to list specialties")?;
            print_json(&specs)
        }
        Commands::Resources { spec } => {
            client
                .fetch_session_details()
                .await
                .context("Failed to load session record")?;
            let resources = client
                .find_resources(&spec)
                .await
                .context("Failed to list resources")?;
            print_json(&resources)
        }
        Commands::Schedule { resource, from, to } => {
            let query = ScheduleQuery::new(resource, from, to);
            let schedule = client
                .get_schedule(&query)
                .await
                .context("Failed to load schedule")?;
            print_json(&schedule)
        }
        Commands::ScheduleTable {
            reg_id,
            specs,
            from,
            to,
        } => {
            let query = ScheduleTableQuery {
                reg_id,
                specialties: specs,
                date_from: from,
                date_to: to,
            };
            let table = client
                .get_schedule_table(&query)
                .await
                .context("Failed to load schedule table")?;
            print_json(&table)
        }
        Commands::Records { all } => {
            client
                .fetch_session_details()
                .await
                .context("Failed to load session record")?;
            let filter = if all {
                RecordFilter::all()
            } else {
                RecordFilter::default()
            };
            let records = client
                .get_booked_records(&filter)
                .await
                .context("Failed to list booked records")?;
            print_json(&records)
        }
        Commands::Book { slot } => {
            let confirmation = client
                .create_appointment(&slot)
                .await
                .with_context(|| format!("Failed to book slot {}", slot))?;
            print_json(&confirmation)
        }
    }
}

fn print_json<V: Serialize>(value: &V) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
