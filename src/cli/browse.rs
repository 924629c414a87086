use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::{info, warn};

use rd_app::usecases::referral_sources::DEFAULT_MAX_WINDOW;
use rd_app::{IncrementalPageLoader, LoaderScrollBinding};
use rd_core::paging::{LoaderConfig, PageSnapshot};
use rd_core::ports::PageSourcePort;
use rd_core::referral::ReferralSource;
use rd_core::scroll::{HoldReason, ScrollDecision, ScrollPosition};

use crate::bootstrap::AppRuntime;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Rows per page (defaults to the saved list page size)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=DEFAULT_MAX_WINDOW as i64))]
    pub page_size: Option<u32>,

    /// Stop after this many pages
    #[arg(long)]
    pub pages: Option<usize>,
}

/// Prints pages as a reader reaching the bottom of the list would load them.
pub async fn run<W: Write>(
    runtime: &AppRuntime,
    args: BrowseArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let saved = runtime.store.current().list_page_size;
    let page_size = runtime
        .list
        .effective_page_size(args.page_size.map(|n| n as usize), saved);
    anyhow::ensure!(
        page_size <= DEFAULT_MAX_WINDOW,
        "page size {page_size} exceeds the maximum of {DEFAULT_MAX_WINDOW}"
    );
    let config = LoaderConfig::new(page_size)?;

    let source: Arc<dyn PageSourcePort<ReferralSource>> =
        Arc::new(runtime.deps.referral_page_source());
    let loader = IncrementalPageLoader::mount(config, source).await;
    let binding = LoaderScrollBinding::new(
        Arc::clone(&loader),
        runtime.list.scroll_policy(),
        Arc::clone(&runtime.deps.clock),
    );
    let mut updates = loader.subscribe();
    let retry_after = Duration::from_millis(runtime.list.scroll_min_interval_ms.max(0) as u64);

    let mut printed = 0;
    let mut pages = 0;
    let result = loop {
        let snapshot = updates.borrow_and_update().clone();
        if let Some(err) = &snapshot.error {
            warn!(error = %err, "browse stopped on fetch error");
            writeln!(out, "error: {}", err.user_message())?;
            break Err(anyhow::Error::new(err.clone()).context("browse stopped on fetch error"));
        }

        if snapshot.data.len() > printed {
            pages += 1;
            print_page(out, &snapshot, printed, pages)?;
            printed = snapshot.data.len();
        }
        if args.pages.is_some_and(|max| pages >= max) {
            break Ok(());
        }

        match binding.on_scroll(ScrollPosition::from_consumed(printed, snapshot.data.len())) {
            ScrollDecision::Fire | ScrollDecision::Hold(HoldReason::Loading) => {
                if let Err(err) = updates.wait_for(|s| !s.is_busy()).await {
                    break Err(anyhow::Error::from(err).context("loader went away"));
                }
            }
            ScrollDecision::Hold(HoldReason::TooSoon) => tokio::time::sleep(retry_after).await,
            ScrollDecision::Hold(reason) => {
                info!(?reason, "browse finished");
                break Ok(());
            }
        }
    };
    loader.unmount();
    result?;

    let snapshot = loader.snapshot();
    writeln!(out, "{} of {} referral sources shown", printed, snapshot.total_count)?;
    Ok(())
}

fn print_page<W: Write>(
    out: &mut W,
    snapshot: &PageSnapshot<ReferralSource>,
    from: usize,
    page_number: usize,
) -> anyhow::Result<()> {
    writeln!(out, "-- page {page_number} --")?;
    for (index, source) in snapshot.data.iter().enumerate().skip(from) {
        match &source.address {
            Some(address) => writeln!(out, "{:>5}  {}  ({})", index + 1, source.name, address)?,
            None => writeln!(out, "{:>5}  {}", index + 1, source.name)?,
        }
    }
    Ok(())
}
