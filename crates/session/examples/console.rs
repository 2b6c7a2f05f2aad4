//! End-to-end walkthrough of the campaign draft workflow against live
//! services.
//!
//! Needs `SMSCAST_STORE_URL`, `SMSCAST_GENAI_URL`, and
//! `SMSCAST_API_TOKEN` in the environment (or a `.env` file):
//!
//! ```sh
//! cargo run -p smscast-session --example console
//! ```

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smscast_core::{RefinementDirective, StaticToken};
use smscast_genai::GenAiApi;
use smscast_session::{CampaignSession, SessionConfig};
use smscast_store::StoreApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smscast_session=debug,smscast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SessionConfig::from_env();
    let token = Arc::new(StaticToken::new(config.api_token.clone()));
    let genai = GenAiApi::new(&config.genai_url, token.clone());
    let store = StoreApi::new(&config.store_url, token);

    let campaigns = store.list_campaigns(None).await?;
    let Some(first) = campaigns.first() else {
        anyhow::bail!("No campaigns available; create one in the console first");
    };
    println!(
        "Opening campaign {} ({} .. {})",
        first.name, first.start_date, first.end_date
    );

    let mut session = CampaignSession::load(genai, store, &first.id).await?;
    println!(
        "Loaded {} saved messages, tone suggestions: {:?}",
        session.saved_messages().len(),
        session.tone_recommendations()
    );

    session.audience_tags_mut().add("Loyal Customers");
    session.generate(3).await?;
    for (i, draft) in session.drafts().iter().enumerate() {
        let star = if draft.is_recommended { " *" } else { "" };
        println!("[{i}] ({}){star} {}", draft.tone, draft.content);
    }

    // Tighten the first draft before saving it.
    session.begin_edit(0)?;
    session.refine(RefinementDirective::Shorten).await?;
    session.commit_edit()?;

    let saved = session.save_draft(0).await?;
    println!("Saved message {} at {}", saved.id, saved.created_at);

    Ok(())
}
