//! Page start-up sequence.
//!
//! Runs once per page view, in order:
//!
//! 1. Load the header and footer fragments.
//! 2. If the page has a cart sidebar container, load the sidebar fragment,
//!    then attach and render the sidebar view.
//! 3. If the page is the checkout page, render and attach the checkout
//!    summary.
//! 4. If the page has a countdown banner, start it.
//! 5. Append the help widget.
//!
//! Each fragment load finishes before the next step starts, so the sidebar
//! never renders before its markup is on the page.

use tokio::task::JoinHandle;
use tracing::instrument;

use crate::cart::{CartStore, SubscriptionId};
use crate::config::StorefrontConfig;
use crate::countdown::{self, COUNTDOWN_MOUNT, Countdown};
use crate::fragments::{CART_SIDEBAR_FRAGMENT, FOOTER_FRAGMENT, FragmentSource, HEADER_FRAGMENT};
use crate::help::HelpWidget;
use crate::page::{BODY_MOUNT, Page};
use crate::storage::KeyValueStorage;
use crate::views::{CheckoutSummary, CheckoutView, SidebarView, ViewError, mounts};

/// Mount point for the header fragment.
pub const HEADER_MOUNT: &str = "header-target";
/// Mount point for the footer fragment.
pub const FOOTER_MOUNT: &str = "footer-target";

/// What the start-up sequence did.
#[derive(Debug)]
pub struct BootReport {
    /// Header fragment injected.
    pub header_loaded: bool,
    /// Footer fragment injected.
    pub footer_loaded: bool,
    /// Sidebar fragment injected; `None` if the page has no sidebar.
    pub sidebar_loaded: Option<bool>,
    /// Subscription of the sidebar view.
    pub sidebar: Option<SubscriptionId>,
    /// Subscription of the checkout view.
    pub checkout: Option<SubscriptionId>,
    /// Summary rendered on the checkout page.
    pub checkout_summary: Option<CheckoutSummary>,
    /// Running countdown task.
    pub countdown: Option<JoinHandle<()>>,
    /// Help widget appended to the page.
    pub help: HelpWidget,
}

/// Run the start-up sequence for `page`.
///
/// Fragment failures are logged and leave their mounts empty.
///
/// # Errors
///
/// Returns an error only if a view template fails to render.
#[instrument(skip_all, fields(path = %page.path()))]
pub async fn boot<S: KeyValueStorage>(
    page: &Page,
    store: &mut CartStore<S>,
    fragments: &FragmentSource,
    config: &StorefrontConfig,
) -> Result<BootReport, ViewError> {
    let header_loaded = fragments
        .load_component(page, HEADER_MOUNT, HEADER_FRAGMENT)
        .await;
    let footer_loaded = fragments
        .load_component(page, FOOTER_MOUNT, FOOTER_FRAGMENT)
        .await;

    let (sidebar_loaded, sidebar) = if page.has_mount(mounts::CART_SIDEBAR_CONTAINER) {
        let loaded = fragments
            .load_component(page, mounts::CART_SIDEBAR_CONTAINER, CART_SIDEBAR_FRAGMENT)
            .await;
        let view = SidebarView::new(page.clone(), config.checkout_path.clone());
        view.render(store.items())?;
        (Some(loaded), Some(store.subscribe(Box::new(view))))
    } else {
        (None, None)
    };

    let (checkout, checkout_summary) = if page.has_mount(mounts::CHECKOUT_CONTAINER) {
        let view = CheckoutView::new(page.clone());
        let summary = view.render(store.items())?;
        (Some(store.subscribe(Box::new(view))), summary)
    } else {
        (None, None)
    };

    let countdown = page.has_mount(COUNTDOWN_MOUNT).then(|| {
        countdown::spawn(
            page.clone(),
            COUNTDOWN_MOUNT,
            Countdown::new(config.countdown_seconds),
        )
    });

    let help = HelpWidget::for_path(&page.path(), config.help.clone());
    page.append_html(BODY_MOUNT, help.render()?);

    tracing::info!(
        header_loaded,
        footer_loaded,
        sidebar = sidebar.is_some(),
        checkout = checkout.is_some(),
        countdown = countdown.is_some(),
        "page booted"
    );

    Ok(BootReport {
        header_loaded,
        footer_loaded,
        sidebar_loaded,
        sidebar,
        checkout,
        checkout_summary,
        countdown,
        help,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use game_mania_core::{CartLineItem, Price};

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::views::EMPTY_CART_MESSAGE;

    const SIDEBAR_HTML: &str = r#"<div class="offcanvas" id="offcanvasCarrinho">
    <div id="lista-itens-carrinho"></div>
    <div class="cart-footer"><strong id="preco-total-carrinho"></strong><button>Finalizar</button></div>
</div>"#;

    fn fragments(with_footer: bool) -> (tempfile::TempDir, FragmentSource) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HEADER_FRAGMENT), "<nav>Game Mania</nav>").unwrap();
        if with_footer {
            std::fs::write(dir.path().join(FOOTER_FRAGMENT), "<footer>2026</footer>").unwrap();
        }
        std::fs::write(dir.path().join(CART_SIDEBAR_FRAGMENT), SIDEBAR_HTML).unwrap();
        let source = FragmentSource::Directory(dir.path().to_path_buf());
        (dir, source)
    }

    fn item(name: &str, price: &str) -> CartLineItem {
        CartLineItem::new(name, price, "img.png").unwrap()
    }

    #[tokio::test]
    async fn test_boot_storefront_page() {
        let (_dir, source) = fragments(true);
        let page = Page::new(
            "/index.html",
            [HEADER_MOUNT, FOOTER_MOUNT, mounts::CART_SIDEBAR_CONTAINER],
        );
        let mut store = CartStore::load(MemoryStorage::new());

        let report = boot(&page, &mut store, &source, &StorefrontConfig::default())
            .await
            .unwrap();

        assert!(report.header_loaded);
        assert!(report.footer_loaded);
        assert_eq!(report.sidebar_loaded, Some(true));
        assert!(report.checkout.is_none());
        assert!(report.countdown.is_none());
        assert!(
            page.html(mounts::CART_ITEMS)
                .unwrap()
                .contains(EMPTY_CART_MESSAGE)
        );
        assert_eq!(page.html(mounts::CART_TOTAL).unwrap(), "R$ 0,00");
        assert!(page.html(BODY_MOUNT).unwrap().contains("robo-container"));
    }

    #[tokio::test]
    async fn test_sidebar_follows_cart_after_boot() {
        let (_dir, source) = fragments(true);
        let page = Page::new("/index.html", [mounts::CART_SIDEBAR_CONTAINER]);
        let mut store = CartStore::load(MemoryStorage::new());
        boot(&page, &mut store, &source, &StorefrontConfig::default())
            .await
            .unwrap();

        store.add_item(item("Headset", "R$ 250,00")).unwrap();
        assert!(page.html(mounts::CART_ITEMS).unwrap().contains("Headset"));
        assert_eq!(page.html(mounts::CART_TOTAL).unwrap(), "R$ 250,00");
    }

    #[tokio::test]
    async fn test_failed_fragment_leaves_mount_empty() {
        let (_dir, source) = fragments(false);
        let page = Page::new("/index.html", [HEADER_MOUNT, FOOTER_MOUNT]);
        let mut store = CartStore::load(MemoryStorage::new());

        let report = boot(&page, &mut store, &source, &StorefrontConfig::default())
            .await
            .unwrap();

        assert!(report.header_loaded);
        assert!(!report.footer_loaded);
        assert_eq!(page.html(FOOTER_MOUNT).unwrap(), "");
        assert_eq!(page.html(HEADER_MOUNT).unwrap(), "<nav>Game Mania</nav>");
    }

    #[tokio::test]
    async fn test_boot_checkout_page() {
        let (_dir, source) = fragments(true);
        let page = Page::new(
            "/checkout.html",
            [
                HEADER_MOUNT,
                FOOTER_MOUNT,
                mounts::CHECKOUT_CONTAINER,
                mounts::CHECKOUT_ITEMS,
                mounts::CHECKOUT_SUBTOTAL,
                mounts::CHECKOUT_TOTAL,
            ],
        );
        let mut store = CartStore::load(MemoryStorage::new());
        store.add_item(item("Monitor", "R$ 1.100,00")).unwrap();
        store.add_item(item("Mouse", "R$ 100,00")).unwrap();

        let report = boot(&page, &mut store, &source, &StorefrontConfig::default())
            .await
            .unwrap();

        assert!(report.sidebar.is_none());
        assert_eq!(
            report.checkout_summary.unwrap().total,
            Price::from_cents(120_000)
        );
        assert_eq!(page.html(mounts::CHECKOUT_TOTAL).unwrap(), "R$ 1.200,00");
        assert!(report.help.message().contains("pagamento"));

        store.remove_item(0).unwrap();
        assert_eq!(page.html(mounts::CHECKOUT_SUBTOTAL).unwrap(), "R$ 100,00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_starts_countdown() {
        let (_dir, source) = fragments(true);
        let page = Page::new("/ofertas.html", [COUNTDOWN_MOUNT]);
        let mut store = CartStore::load(MemoryStorage::new());
        let config = StorefrontConfig {
            countdown_seconds: 3600,
            ..StorefrontConfig::default()
        };

        let report = boot(&page, &mut store, &source, &config).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        assert_eq!(page.html(COUNTDOWN_MOUNT).unwrap(), "01 : 00 : 00");

        report.countdown.unwrap().abort();
    }
}
