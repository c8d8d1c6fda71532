use anyhow::Result;

use super::SessionOptions;
use crate::render;

/// One-shot text lookup.
pub async fn run(options: &SessionOptions, query: &str) -> Result<()> {
    let mut session = options.factory(None, false)?.create_session();
    session.start_scan();
    session.set_query(query);

    match session.submit_search().await {
        Some(outcome) => {
            render::print_notice(&session);
            render::print_outcome(&outcome);
        }
        None => render::print_notice(&session),
    }

    session.teardown();
    Ok(())
}
