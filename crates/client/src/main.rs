//! huddle-client CLI entry point.

use clap::Parser;

use huddle_client::cli::events::EventsAction;
use huddle_client::cli::{Cli, Commands};
use huddle_client::output::{pretty, render};
use huddle_client::HuddleClient;
use huddle_core::event::{CreateEventRequest, SubmitRsvpRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = HuddleClient::new(&cli.base_url);
    let format = cli.format;

    match cli.command {
        Commands::Events(events_cmd) => match events_cmd.action {
            EventsAction::List => {
                let events = client.list_events().await?;
                println!("{}", render(&events, format, |e| pretty::format_events(e)));
            }
            EventsAction::Get { id } => {
                let event = client.get_event(id).await?;
                println!("{}", render(&event, format, pretty::format_event_summary));
            }
            EventsAction::Create {
                title,
                date,
                description,
                name,
                email,
            } => {
                let request =
                    CreateEventRequest::new(title, date, name, email).with_description(description);
                let event = client.create_event(&request).await?;
                println!(
                    "{}",
                    render(&event, format, |e| format!("Created:\n{}", pretty::format_event(e)))
                );
            }
            EventsAction::Delete { id } => {
                let deleted = client.delete_event(id).await?;
                if !cli.quiet {
                    println!("{} ({})", deleted.message, id);
                }
            }
            EventsAction::Rsvp {
                id,
                name,
                email,
                response,
            } => {
                let request = SubmitRsvpRequest::new(name, email, response);
                let rsvp = client.submit_rsvp(id, &request).await?;
                println!(
                    "{}",
                    render(&rsvp, format, |r| format!("Recorded:\n{}", pretty::format_rsvp(r)))
                );
            }
            EventsAction::Rsvps { id } => {
                let rsvps = client.list_rsvps(id).await?;
                println!("{}", render(&rsvps, format, |r| pretty::format_rsvps(r)));
            }
            EventsAction::Count { id } => {
                let count = client.rsvp_count(id).await?;
                println!("{}", render(&count, format, pretty::format_count));
            }
        },
        Commands::Health => {
            let report = client.health().await?;
            println!("{}", render(&report, format, pretty::format_health));
            if !report.is_healthy() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
