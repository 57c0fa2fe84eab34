//! Five-step quote wizard state.
//!
//! The original flow persisted work-in-progress quotes in whatever
//! transport the active rendering mode used; here the whole wizard is a
//! single explicit [`QuoteForm`] the caller owns, saves, and passes back
//! into each step. Derived values (recommended sheets, the pricing
//! breakdown) are recomputed on demand with [`QuoteForm::sync_derived`]
//! rather than through any reactivity machinery.

use serde::{Deserialize, Serialize};

use crate::calc::{compute_layout, compute_pricing, recommended_sheets};
use crate::types::*;

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Mode,
    Customer,
    Product,
    Operational,
    Summary,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Mode => 1,
            WizardStep::Customer => 2,
            WizardStep::Product => 3,
            WizardStep::Operational => 4,
            WizardStep::Summary => 5,
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Mode => Some(WizardStep::Customer),
            WizardStep::Customer => Some(WizardStep::Product),
            WizardStep::Product => Some(WizardStep::Operational),
            WizardStep::Operational => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }
}

/// Step 1 choice: start blank or prefill from a saved quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteMode {
    #[default]
    New,
    Existing {
        template_id: String,
    },
}

/// Complete wizard state for one quote in progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub mode: QuoteMode,
    #[serde(default)]
    pub client: Client,
    #[serde(default)]
    pub product: Product,
    #[serde(default)]
    pub operational: Operational,
    #[serde(default)]
    pub settings: CalculationSettings,
    /// Last computed breakdown, kept for display continuity
    #[serde(default)]
    pub calculation: PricingResult,
}

impl QuoteForm {
    /// Step 1: choose new-vs-existing. An existing quote must name a
    /// known template and prefills the rest of the form from it.
    pub fn set_mode(&mut self, mode: QuoteMode, templates: &[QuoteTemplate]) -> Result<()> {
        match &mode {
            QuoteMode::New => {
                *self = QuoteForm::default();
            }
            QuoteMode::Existing { template_id } => {
                let template = templates
                    .iter()
                    .find(|t| t.id == *template_id)
                    .ok_or_else(|| QuoteError::UnknownTemplate(template_id.clone()))?;
                self.apply_template(template);
                self.mode = mode;
            }
        }
        Ok(())
    }

    /// Step 2: capture customer details.
    pub fn set_client(&mut self, client: Client) -> Result<()> {
        if client.contact_person.trim().is_empty() {
            return Err(QuoteError::InvalidInput(
                "Contact person is required".to_string(),
            ));
        }
        if client.email.trim().is_empty() {
            return Err(QuoteError::InvalidInput("Email is required".to_string()));
        }
        if client.client_type == ClientType::Company && client.company_name.trim().is_empty() {
            return Err(QuoteError::InvalidInput(
                "Company name is required for company clients".to_string(),
            ));
        }
        self.client = client;
        Ok(())
    }

    /// Step 3: capture the product specification.
    pub fn set_product(&mut self, product: Product) -> Result<()> {
        if product.product_name.trim().is_empty() {
            return Err(QuoteError::InvalidInput(
                "Product name is required".to_string(),
            ));
        }
        if product.quantity == 0 {
            return Err(QuoteError::InvalidInput(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if product.size.close.width_cm <= 0.0 || product.size.close.height_cm <= 0.0 {
            return Err(QuoteError::InvalidInput(
                "Close size must be positive".to_string(),
            ));
        }
        if !(product.sides == 1 || product.sides == 2) {
            return Err(QuoteError::InvalidInput(
                "Sides must be 1 or 2".to_string(),
            ));
        }
        self.product = product;
        self.sync_derived();
        Ok(())
    }

    /// Step 4: capture sheet setup and finishing costs.
    pub fn set_operational(&mut self, operational: Operational) -> Result<()> {
        if operational.papers.is_empty() {
            return Err(QuoteError::InvalidInput(
                "At least one operational paper is required".to_string(),
            ));
        }
        self.operational = operational;
        self.sync_derived();
        Ok(())
    }

    /// Step 5: adjust margin and discount.
    pub fn set_calculation(&mut self, settings: CalculationSettings) -> Result<()> {
        if !(0.0..=100.0).contains(&settings.margin_percentage) {
            return Err(QuoteError::InvalidInput(
                "Margin percentage must be between 0 and 100".to_string(),
            ));
        }
        if let Some(discount) = &settings.discount {
            if !(0.0..=100.0).contains(&discount.percentage) {
                return Err(QuoteError::InvalidInput(
                    "Discount percentage must be between 0 and 100".to_string(),
                ));
            }
            if discount.amount < 0.0 {
                return Err(QuoteError::InvalidInput(
                    "Discount amount cannot be negative".to_string(),
                ));
            }
        }
        self.settings = settings;
        self.sync_derived();
        Ok(())
    }

    /// Layout parameters for the first operational paper and the
    /// product's finished size.
    pub fn layout_params(&self) -> LayoutParams {
        let paper = self.operational.papers.first();
        LayoutParams {
            sheet_width: paper.and_then(|p| p.sheet_width).unwrap_or(0.0),
            sheet_height: paper.and_then(|p| p.sheet_height).unwrap_or(0.0),
            piece_width: self.product.size.close.width_cm,
            piece_height: self.product.size.close.height_cm,
            margin: self.operational.margin,
            gutter: self.operational.gutter,
            rotate: self.operational.rotate,
            gripper_margin: self.operational.gripper_margin,
        }
    }

    /// Pricing inputs for the first operational paper. When no explicit
    /// per-sheet price was entered, the product's first catalog paper
    /// supplies its cost.
    pub fn pricing_inputs(&self) -> PricingInputs {
        let mut paper = self
            .operational
            .papers
            .first()
            .cloned()
            .unwrap_or_default();
        if paper.price_per_sheet.filter(|c| *c > 0.0).is_none() {
            paper.price_per_sheet = self.product.papers.first().map(|p| p.cost);
        }
        PricingInputs {
            paper,
            finishing: self.operational.finishing.clone(),
            margin_percentage: self.settings.margin_percentage,
            discount: self.settings.discount.clone(),
        }
    }

    /// Recomputes everything the form derives from its own fields: the
    /// recommended sheet count from the current layout, then the full
    /// pricing breakdown. Entered sheet counts always win over the
    /// recommendation when present and positive.
    pub fn sync_derived(&mut self) {
        let layout = compute_layout(&self.layout_params());
        let quantity = self.product.quantity;
        if let Some(paper) = self.operational.papers.first_mut() {
            paper.recommended_sheets = recommended_sheets(quantity, layout.per_sheet);
        }
        self.calculation = compute_pricing(&self.pricing_inputs());
    }

    /// Prefills the form from a saved quote template (step 1 "existing").
    pub fn apply_template(&mut self, template: &QuoteTemplate) {
        self.client = template.client.clone();
        self.product = template.product.clone();
        if let Some(operational) = &template.operational {
            self.operational = operational.clone();
        }
        self.sync_derived();
    }
}
