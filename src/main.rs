use std::sync::Arc;

use chrono::Utc;
use pawpal::{
    alerts::DueStatus,
    appsettings::AppSettings,
    health::HealthAlertService,
    models::OutreachEvent,
    storage::{EventRow, InMemoryReminderStorage, ReminderRow, load_rows},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = AppSettings::load()?;
    log::info!("Starting PawPal with settings {:?}", settings);

    let rows: Vec<ReminderRow> = load_rows(&settings.data.reminders_path)?;
    let storage = Arc::new(InMemoryReminderStorage::from_rows(rows)?);
    let service = HealthAlertService::new(storage, settings.alerts.window());

    if settings.data.owner_id.is_empty() {
        log::warn!("No owner configured, skipping health alerts");
    } else {
        let alerts = service
            .alerts_for_owner(&settings.data.owner_id, Utc::now())
            .await?;

        println!("Health alerts for {}:", settings.data.owner_id);
        for alert in &alerts {
            let label = match alert.status {
                DueStatus::Overdue => "OVERDUE",
                DueStatus::Upcoming => "due soon",
                DueStatus::Ignorable => continue,
            };
            println!(
                "  [{label}] {} for {} on {}",
                alert.reminder.vaccine_name,
                alert.reminder.pet_name,
                alert.reminder.next_due_date
            );
        }
    }

    let link_builder = settings.calendar.link_builder()?;
    let events: Vec<EventRow> = load_rows(&settings.data.events_path)?;

    println!("Add to calendar:");
    for row in events {
        let id = row.id;
        match OutreachEvent::try_from(row) {
            Ok(event) => println!("  {}: {}", event.title, link_builder.build(&event)),
            Err(error) => log::warn!("Skipping event {id}: {error}"),
        }
    }

    Ok(())
}
