//! Category and platform filters for product grids.
//!
//! Product listings tag each card with a category (`data-categoria`) and
//! the games page tags each card with a platform (`data-plataforma`). A row
//! of filter buttons picks which cards stay visible; the clicked button is
//! highlighted as the only active one.

use game_mania_core::FilterSelection;

/// Which card attribute a grid filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Hardware, notebooks and other products, filtered by category.
    Products,
    /// Games, filtered by platform.
    Games,
}

impl GridKind {
    /// Name of the card attribute holding the filter value.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Products => "data-categoria",
            Self::Games => "data-plataforma",
        }
    }
}

/// A card in a product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCard {
    /// Card label, used for display and lookups.
    pub name: String,
    /// Category or platform value.
    pub attribute: String,
    /// Whether the filter currently hides the card.
    pub hidden: bool,
}

/// A filter button above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// Value the button filters by.
    pub selection: FilterSelection,
    /// Whether the button is highlighted.
    pub active: bool,
}

/// A filterable grid of cards.
#[derive(Debug, Clone)]
pub struct ProductGrid {
    kind: GridKind,
    cards: Vec<GridCard>,
    buttons: Vec<FilterButton>,
}

impl ProductGrid {
    /// Create a grid with every card visible and no active button.
    #[must_use]
    pub fn new<C, N, A>(kind: GridKind, cards: C) -> Self
    where
        C: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: Into<String>,
    {
        Self {
            kind,
            cards: cards
                .into_iter()
                .map(|(name, attribute)| GridCard {
                    name: name.into(),
                    attribute: attribute.into(),
                    hidden: false,
                })
                .collect(),
            buttons: Vec::new(),
        }
    }

    /// Add a row of filter buttons.
    #[must_use]
    pub fn with_buttons(mut self, selections: impl IntoIterator<Item = FilterSelection>) -> Self {
        self.buttons = selections
            .into_iter()
            .map(|selection| FilterButton {
                selection,
                active: false,
            })
            .collect();
        self
    }

    /// Apply `selection`.
    ///
    /// When a button was clicked (`clicked` is its position) and the grid
    /// has buttons, that button becomes the only active one. An unknown
    /// position clears every highlight.
    pub fn filter(&mut self, selection: &FilterSelection, clicked: Option<usize>) {
        if let Some(clicked) = clicked.filter(|_| !self.buttons.is_empty()) {
            for (i, button) in self.buttons.iter_mut().enumerate() {
                button.active = i == clicked;
            }
        }

        for card in &mut self.cards {
            card.hidden = !selection.admits(&card.attribute);
        }

        tracing::debug!(
            attribute = self.kind.attribute(),
            filter = %selection,
            visible = self.visible().count(),
            "grid filtered"
        );
    }

    /// Cards left visible by the last filter.
    pub fn visible(&self) -> impl Iterator<Item = &GridCard> {
        self.cards.iter().filter(|card| !card.hidden)
    }

    /// Every card, visible or not.
    #[must_use]
    pub fn cards(&self) -> &[GridCard] {
        &self.cards
    }

    /// The filter buttons.
    #[must_use]
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// What the grid filters on.
    #[must_use]
    pub const fn kind(&self) -> GridKind {
        self.kind
    }
}
