//! Terminal presentation shell for the dashboard core.
//!
//! Renders the bell badge, the notification dropdown, the getting-started
//! panel and the selected fax detail as text, and walks the workflow end to
//! end: demo arrivals, selection, inbox hand-over, acknowledgement.

use std::path::Path;
use std::time::SystemTime;

use openfax_core::{
    AppConfig, DashboardEvent, FaxArrival, NoDocuments, NotificationStore, PageCount, fax_record,
};

const GETTING_STARTED_SECTIONS: [&str; 6] = [
    "Your First Order",
    "Fax Lists",
    "Documents",
    "Mail Merge",
    "Reporting",
    "Portal",
];

fn main() -> openfax_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::var_os("OPENFAX_DATA_DIR") {
        Some(dir) => AppConfig::load(&AppConfig::path(Path::new(&dir)))?,
        None => AppConfig::default(),
    };

    let mut store = NotificationStore::new();

    println!("OPENFAX — Secure Fax Portal");
    if config.general.show_getting_started {
        render_getting_started();
    }

    // Demo arrivals with the page counts the boundary reported.
    for pages in [1u32, 3, 2] {
        let arrival = FaxArrival::demo(PageCount::try_from(pages)?, &config.demo);
        store.apply(DashboardEvent::NewFaxArrived(arrival), SystemTime::now());
    }
    render_bell(&store);

    store.open_dropdown();
    render_dropdown(&store);

    // The user opens the newest notification.
    let newest = store.notifications()[0].id.clone();
    store.apply(DashboardEvent::NotificationSelected(newest), SystemTime::now());
    render_bell(&store);

    if let Some(selected) = store.selected() {
        let fax = fax_record(selected, &NoDocuments);
        println!("Inbox — fax {} ({})", fax.ssid, fax.date);
        println!("  From {} to {}", fax.from_number, fax.to_number);
        println!("  Assigned to {}, {} pages", fax.assigned_user, fax.page_count);
        if config.general.account_owner {
            println!("  (account owner view)");
        }
    }
    store.apply(DashboardEvent::SelectionConsumed, SystemTime::now());

    store.apply(DashboardEvent::MarkAllRead, SystemTime::now());
    render_bell(&store);

    Ok(())
}

fn render_bell(store: &NotificationStore) {
    match store.unread_count() {
        0 => println!("[bell]"),
        unread => println!("[bell] {unread} unread"),
    }
}

fn render_dropdown(store: &NotificationStore) {
    if !store.dropdown_open() {
        return;
    }

    println!("Notifications");
    if store.notifications().is_empty() {
        println!("  No new notifications");
        return;
    }
    for n in store.notifications() {
        let marker = if n.read { ' ' } else { '*' };
        println!(
            "  {marker} New fax from {} to {} ({}) | {} pages | {}",
            n.from_number, n.user_inbox, n.to_number, n.pages, n.timestamp
        );
    }
}

fn render_getting_started() {
    println!("Getting Started");
    for section in GETTING_STARTED_SECTIONS {
        println!("  - {section}");
    }
}
