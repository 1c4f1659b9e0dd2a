//! Page assembly command.
//!
//! Runs the start-up sequence against the configured fragment source and
//! prints every mount point, so a page can be checked without a browser.

use game_mania_storefront::boot::{FOOTER_MOUNT, HEADER_MOUNT, boot};
use game_mania_storefront::config::StorefrontConfig;
use game_mania_storefront::countdown::COUNTDOWN_MOUNT;
use game_mania_storefront::error::Result;
use game_mania_storefront::page::Page;
use game_mania_storefront::views::mounts;

/// Boot the page at `path` and print its mounts.
///
/// When `mount_ids` is empty the mounts are picked from the path: every
/// page gets the header, footer and cart sidebar; the checkout page gets
/// its summary and the home page its offer countdown.
#[allow(clippy::print_stdout)]
pub async fn boot_page(config: &StorefrontConfig, path: &str, mount_ids: Vec<String>) -> Result<()> {
    let mount_ids = if mount_ids.is_empty() {
        default_mounts(path)
    } else {
        mount_ids
    };

    let page = Page::new(path, mount_ids);
    let mut store = super::open_store(config)?;
    let report = boot(&page, &mut store, &config.fragment_source(), config).await?;

    if let Some(countdown) = report.countdown {
        countdown.abort();
    }

    for (id, html) in page.mounts() {
        println!("<!-- #{id} -->");
        println!("{html}");
    }
    Ok(())
}

fn default_mounts(path: &str) -> Vec<String> {
    let mut ids = vec![HEADER_MOUNT, FOOTER_MOUNT, mounts::CART_SIDEBAR_CONTAINER];

    if path.contains("checkout") {
        ids.extend([
            mounts::CHECKOUT_CONTAINER,
            mounts::CHECKOUT_ITEMS,
            mounts::CHECKOUT_SUBTOTAL,
            mounts::CHECKOUT_TOTAL,
        ]);
    } else if path == "/" || path.ends_with("index.html") {
        ids.push(COUNTDOWN_MOUNT);
    }

    ids.into_iter().map(str::to_owned).collect()
}
