//! Hover-triggered help widget.
//!
//! A mascot pinned to the corner of every page. Hovering it shows a speech
//! balloon with a page-specific hint and a link to talk to a specialist on
//! WhatsApp; leaving the mascot or pressing the close button hides it.

use askama::Template;

use crate::views::ViewError;

/// Mascot image.
pub const AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/8654/8654193.png";

const DEFAULT_MESSAGE: &str = "Psst! Procurando o melhor setup? 🎮";
const CHECKOUT_MESSAGE: &str = "Dúvidas no pagamento? Posso ajudar! 💳";
const CART_MESSAGE: &str = "Ótimas escolhas! Falta pouco para o nível máximo. 🚀";
const LOGIN_MESSAGE: &str = "Esqueceu a senha? Vamos resolver. 🔐";
const PRODUCT_MESSAGE: &str = "Essa peça é uma máquina! Quer ver as specs? 🔧";

/// Path fragments and the hint shown for them, first match wins.
const PAGE_MESSAGES: &[(&[&str], &str)] = &[
    (&["checkout"], CHECKOUT_MESSAGE),
    (&["carrinho", "cart"], CART_MESSAGE),
    (&["login", "entrar"], LOGIN_MESSAGE),
    (&["produto"], PRODUCT_MESSAGE),
];

/// Where the "talk to a specialist" link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContact {
    /// WhatsApp number in international format, digits only.
    pub whatsapp_number: String,
    /// Pre-filled chat message.
    pub greeting: String,
}

impl Default for HelpContact {
    fn default() -> Self {
        Self {
            whatsapp_number: "5537998296855".to_string(),
            greeting: "Olá! Estou na loja Gamemania e tenho uma dúvida.".to_string(),
        }
    }
}

impl HelpContact {
    /// `wa.me` link opening a chat with the greeting filled in.
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            urlencoding::encode(&self.greeting)
        )
    }
}

#[derive(Template)]
#[template(path = "partials/help_widget.html")]
struct HelpWidgetTemplate<'a> {
    message: &'a str,
    visible: bool,
    contact_url: &'a str,
    avatar_url: &'a str,
}

/// The help mascot and its balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpWidget {
    message: &'static str,
    visible: bool,
    contact: HelpContact,
}

impl HelpWidget {
    /// Create the widget for the page at `path`, balloon hidden.
    #[must_use]
    pub fn for_path(path: &str, contact: HelpContact) -> Self {
        Self {
            message: message_for_path(path),
            visible: false,
            contact,
        }
    }

    /// Hint shown in the balloon.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the balloon is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer entered the mascot area.
    pub fn mouse_enter(&mut self) {
        self.visible = true;
    }

    /// Pointer left the mascot area.
    pub fn mouse_leave(&mut self) {
        self.visible = false;
    }

    /// Close button pressed.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Link to the specialist chat.
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        self.contact.whatsapp_url()
    }

    /// Widget markup in its current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self) -> Result<String, ViewError> {
        let contact_url = self.whatsapp_url();
        Ok(HelpWidgetTemplate {
            message: self.message,
            visible: self.visible,
            contact_url: &contact_url,
            avatar_url: AVATAR_URL,
        }
        .render()?)
    }
}

fn message_for_path(path: &str) -> &'static str {
    let path = path.to_lowercase();
    PAGE_MESSAGES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| path.contains(needle)))
        .map_or(DEFAULT_MESSAGE, |&(_, message)| message)
}
