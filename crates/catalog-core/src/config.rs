//! Markup contract and user-visible labels.
//!
//! Defaults reproduce the catalog page the enhancer was written for. A page
//! with different class names can pass a partial JSON override; missing
//! fields keep their defaults.

use serde::{Deserialize, Serialize};

// ─── Errors ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("config field `{0}` must be a single class name, got `{1}`")]
    ClassName(&'static str, String),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

// ─── Config ───────────────────────────────────────────────────────────────

/// Selectors, class names and element ids the enhancer relies on.
///
/// `*_selector` fields are CSS selectors evaluated relative to the enclosing
/// element; `*_class` fields are bare class names; `*_id` fields are element
/// ids looked up on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkupConfig {
    pub section_selector: String,
    pub toggle_selector: String,
    pub products_selector: String,
    /// Marker class present on a collapsed section.
    pub collapsed_class: String,

    pub card_selector: String,
    pub image_selector: String,
    pub name_selector: String,
    pub price_selector: String,
    pub stock_selector: String,
    /// Flag class on a stock indicator meaning "no stock".
    pub no_stock_class: String,
    pub info_selector: String,
    pub info_paragraph_selector: String,

    pub image_wrapper_class: String,
    pub badge_class: String,

    pub modal_id: String,
    /// Marker class present on the modal root while it is open.
    pub modal_open_class: String,
    pub close_button_id: String,
    pub modal_image_id: String,
    pub modal_name_id: String,
    pub modal_price_id: String,
    pub modal_stock_id: String,
    pub modal_stock_class: String,
    pub modal_sizes_id: String,
    pub modal_sizes_section_selector: String,
    pub size_badge_class: String,
    pub placeholder_color: String,
    pub placeholder_font_size: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            section_selector: ".categoria-seccion".into(),
            toggle_selector: ".toggle-btn".into(),
            products_selector: ".productos".into(),
            collapsed_class: "colapsada".into(),
            card_selector: ".producto".into(),
            image_selector: "img".into(),
            name_selector: "h3".into(),
            price_selector: ".precio".into(),
            stock_selector: ".stock".into(),
            no_stock_class: "sin-stock".into(),
            info_selector: ".info".into(),
            info_paragraph_selector: "p".into(),
            image_wrapper_class: "producto-imagen-container".into(),
            badge_class: "stock-badge".into(),
            modal_id: "modal-producto".into(),
            modal_open_class: "mostrar".into(),
            close_button_id: "cerrar-modal-producto".into(),
            modal_image_id: "modal-img".into(),
            modal_name_id: "modal-nombre".into(),
            modal_price_id: "modal-precio".into(),
            modal_stock_id: "modal-stock".into(),
            modal_stock_class: "modal-stock".into(),
            modal_sizes_id: "modal-talles".into(),
            modal_sizes_section_selector: ".modal-talles-container".into(),
            size_badge_class: "modal-talle-badge".into(),
            placeholder_color: "#999".into(),
            placeholder_font_size: "0.9rem".into(),
        }
    }
}

impl MarkupConfig {
    /// Class list for an injected stock badge: `"<badge> <no-stock>"`.
    pub fn badge_class_list(&self) -> String {
        format!("{} {}", self.badge_class, self.no_stock_class)
    }

    /// Class list for the modal stock indicator when out of stock.
    pub fn modal_stock_class_list(&self) -> String {
        format!("{} {}", self.modal_stock_class, self.no_stock_class)
    }

    /// Selector matching only flagged stock indicators.
    pub fn flagged_stock_selector(&self) -> String {
        format!("{}.{}", self.stock_selector, self.no_stock_class)
    }

    fn selector_fields(&self) -> [(&'static str, &str); 11] {
        [
            ("sectionSelector", self.section_selector.as_str()),
            ("toggleSelector", self.toggle_selector.as_str()),
            ("productsSelector", self.products_selector.as_str()),
            ("cardSelector", self.card_selector.as_str()),
            ("imageSelector", self.image_selector.as_str()),
            ("nameSelector", self.name_selector.as_str()),
            ("priceSelector", self.price_selector.as_str()),
            ("stockSelector", self.stock_selector.as_str()),
            ("infoSelector", self.info_selector.as_str()),
            ("infoParagraphSelector", self.info_paragraph_selector.as_str()),
            ("modalSizesSectionSelector", self.modal_sizes_section_selector.as_str()),
        ]
    }

    fn class_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("collapsedClass", self.collapsed_class.as_str()),
            ("noStockClass", self.no_stock_class.as_str()),
            ("imageWrapperClass", self.image_wrapper_class.as_str()),
            ("badgeClass", self.badge_class.as_str()),
            ("modalOpenClass", self.modal_open_class.as_str()),
            ("modalStockClass", self.modal_stock_class.as_str()),
            ("sizeBadgeClass", self.size_badge_class.as_str()),
        ]
    }

    fn id_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("modalId", self.modal_id.as_str()),
            ("closeButtonId", self.close_button_id.as_str()),
            ("modalImageId", self.modal_image_id.as_str()),
            ("modalNameId", self.modal_name_id.as_str()),
            ("modalPriceId", self.modal_price_id.as_str()),
            ("modalStockId", self.modal_stock_id.as_str()),
            ("modalSizesId", self.modal_sizes_id.as_str()),
        ]
    }

    /// Selectors and ids must be non-blank; class names must be a single
    /// non-blank token (`classList.add` rejects anything else).
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.selector_fields().into_iter().chain(self.id_fields()) {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        for (name, value) in self.class_fields() {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::ClassName(name, value.to_string()));
            }
        }
        Ok(())
    }
}

/// Text the enhancer writes into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    pub badge: String,
    pub modal_out_of_stock: String,
    pub no_sizes: String,
    /// Label introducing the size line in a card's info block.
    pub size_label: String,
    pub open_glyph: String,
    pub closed_glyph: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            badge: "Sin stock".into(),
            modal_out_of_stock: "Sin stock".into(),
            no_sizes: "No hay talles disponibles".into(),
            size_label: crate::sizes::DEFAULT_SIZE_LABEL.into(),
            open_glyph: "\u{2212}".into(),
            closed_glyph: "+".into(),
        }
    }
}

/// Top-level enhancer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub markup: MarkupConfig,
    pub labels: LabelConfig,
    /// `log` level name (`"error"` .. `"trace"`, or `"off"`). Default: info.
    pub log_level: Option<String>,
}

impl CatalogConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed JSON, a blank selector, id or
    /// class name, a class name containing whitespace, or an unknown log
    /// level.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// See [`CatalogConfig::from_json`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.markup.validate()?;
        if self.labels.size_label.trim().is_empty() {
            return Err(ConfigError::EmptyField("sizeLabel"));
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// # Errors
    /// Returns `ConfigError::LogLevel` when `log_level` is not a level name.
    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        match &self.log_level {
            None => Ok(log::LevelFilter::Info),
            Some(name) => name
                .parse()
                .map_err(|_| ConfigError::LogLevel(name.clone())),
        }
    }
}
