//! Example walking through one portal session
//!
//! Run with:
//! ```bash
//! cargo run --example portal_session
//! ```

use komuniti_core::core_audience::{ContentQuery, FacetKind};
use komuniti_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use komuniti_core::{Member, PortalEngine};
use tracing::info;

fn main() {
    let config = LogConfig::new(LogLevel::Debug).with_target(false);
    init_logging_with_config(config).expect("Failed to initialize logging");

    // The identity collaborator would hand us this after verification.
    let member = Member::new("demo", "Demo User")
        .with_scholarship("MARA")
        .with_institution("Yonsei");

    let engine = PortalEngine::new();

    let membership = engine.membership(&member);
    info!(
        batch = %membership.batch_year,
        clubs = ?membership.clubs(),
        events = ?membership.events(),
        "derived membership"
    );

    let feed = engine.feed(&member, &ContentQuery::default());
    for item in &feed {
        info!(id = %item.id, title = %item.title, read = item.read, "feed item");
    }

    let unread = engine.feed(&member, &ContentQuery::default().with_facet(FacetKind::Unread));
    info!(total = feed.len(), unread = unread.len(), "feed summary");

    for channel in engine.channels(&member) {
        info!(
            id = %channel.id,
            kind = %channel.kind,
            members = channel.member_count,
            "channel available"
        );
    }
}
