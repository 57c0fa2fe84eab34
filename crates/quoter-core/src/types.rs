use serde::{Deserialize, Serialize};

/// Grid imposition request: press sheet, finished piece, and spacing, all in cm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutParams {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Finished (close) piece size
    pub piece_width: f64,
    pub piece_height: f64,
    /// Uniform margin reserved on every sheet edge
    #[serde(default)]
    pub margin: f64,
    /// Spacing between adjacent pieces, for cutting tolerance
    #[serde(default)]
    pub gutter: f64,
    /// Swap piece width/height before packing
    #[serde(default)]
    pub rotate: bool,
    /// Extra clearance reserved at the top edge for the press gripper
    #[serde(default)]
    pub gripper_margin: f64,
}

/// Result of packing one piece size onto one sheet size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub across: u32,
    pub down: u32,
    pub per_sheet: u32,
    /// Piece area over usable printable area, percent, one decimal
    pub used_area_percent: f64,
}

/// Position of a single piece on the sheet, in sheet coordinates (cm, origin top-left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// Catalog entry for a stock paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperOption {
    pub id: String,
    pub material: String,
    pub gsm: u32,
    /// Price per press sheet
    pub cost: f64,
}

/// Paper as configured on the operational step of a quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationalPaper {
    /// Press sheet size entered by operations, cm
    #[serde(default)]
    pub sheet_width: Option<f64>,
    #[serde(default)]
    pub sheet_height: Option<f64>,
    /// Explicit per-sheet price; unset means fall back to the catalog cost
    #[serde(default)]
    pub price_per_sheet: Option<f64>,
    /// Sheets the operator chose to run; unset means use the recommendation
    #[serde(default)]
    pub entered_sheets: Option<u32>,
    /// ceil(quantity / pieces-per-sheet), kept in sync with the layout
    #[serde(default)]
    pub recommended_sheets: u32,
}

/// One finishing operation with its flat cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishingLineItem {
    pub name: String,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Discount settings. When applied, a positive amount takes priority
/// over the percentage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default)]
    pub applied: bool,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub amount: f64,
}

/// Everything the pricing aggregator needs for one quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingInputs {
    #[serde(default)]
    pub paper: OperationalPaper,
    #[serde(default)]
    pub finishing: Vec<FinishingLineItem>,
    #[serde(default)]
    pub margin_percentage: f64,
    #[serde(default)]
    pub discount: Option<Discount>,
}

/// Layered cost breakdown ending in a VAT-inclusive total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub paper_cost: f64,
    pub finishing_cost: f64,
    pub base_before_margin: f64,
    pub margin_amount: f64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub final_subtotal: f64,
    pub vat_amount: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    #[default]
    Individual,
    Company,
}

/// Customer details captured on step 2.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub additional_info: String,
}

impl Client {
    /// Name shown in quote lists: the company for company clients, the
    /// contact person otherwise.
    pub fn customer_display(&self) -> String {
        if self.client_type == ClientType::Company && !self.company_name.trim().is_empty() {
            self.company_name.clone()
        } else {
            self.contact_person.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintingMethod {
    #[default]
    Offset,
    Digital,
    Inkjet,
}

/// A width/height pair in centimeters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SizeCm {
    pub width_cm: f64,
    pub height_cm: f64,
}

/// Flat (open) and close (finished) product sizes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SizeSpec {
    #[serde(default)]
    pub flat: SizeCm,
    #[serde(default)]
    pub close: SizeCm,
}

/// Product specification captured on step 3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub printing: PrintingMethod,
    /// 1 = single sided, 2 = duplex
    #[serde(default = "default_sides")]
    pub sides: u8,
    #[serde(default)]
    pub size: SizeSpec,
    /// Papers chosen from the catalog for this product
    #[serde(default)]
    pub papers: Vec<PaperOption>,
}

fn default_sides() -> u8 {
    1
}

impl Default for Product {
    fn default() -> Self {
        Self {
            product_name: String::default(),
            quantity: u32::default(),
            printing: PrintingMethod::default(),
            sides: default_sides(),
            size: SizeSpec::default(),
            papers: Vec::default(),
        }
    }
}

/// Operational data captured on step 4: sheet setup and finishing costs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operational {
    #[serde(default)]
    pub papers: Vec<OperationalPaper>,
    #[serde(default)]
    pub finishing: Vec<FinishingLineItem>,
    /// Sheet edge margin, cm
    #[serde(default)]
    pub margin: f64,
    /// Spacing between pieces, cm
    #[serde(default)]
    pub gutter: f64,
    #[serde(default)]
    pub rotate: bool,
    /// Gripper clearance at the top edge, cm
    #[serde(default)]
    pub gripper_margin: f64,
}

/// Margin and discount settings adjusted on the summary step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationSettings {
    #[serde(default)]
    pub margin_percentage: f64,
    #[serde(default)]
    pub discount: Option<Discount>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateStatus {
    #[default]
    Draft,
    Pending,
    Done,
}

/// A previously saved quote, offered as a starting point on step 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteTemplate {
    pub id: String,
    pub status: TemplateStatus,
    /// ISO date the quote was created
    pub date: String,
    pub customer_name: String,
    pub client: Client,
    pub product: Product,
    #[serde(default)]
    pub operational: Option<Operational>,
}

/// Error type for quote form operations. The calculators themselves are
/// total functions and never error.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown quote template '{0}'")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
