//! # Listing Prompts
//!
//! Fixed prompts and sampling parameters for the text extractor and the image
//! describer.

// --- Text Listing Extraction ---
pub const TEXT_SYSTEM_PROMPT: &str = r#"You are a Meesho product listing expert. Given a product description, extract and generate structured listing fields.

Return ONLY a valid JSON object with these exact keys (use empty string "" if unknown):
{
  "product_name": "Full product name (max 100 chars)",
  "color": "Primary color(s) of the product",
  "meesho_price": "Selling price in INR (numbers only, no ₹ symbol)",
  "product_mrp": "MRP in INR (numbers only)",
  "only_wrong_return_price": "Wrong return price in INR (usually 0 or same as meesho_price)",
  "inventory": "Stock quantity (number only)",
  "supplier_gst_percent": "GST percentage (e.g. 5, 12, 18: number only)",
  "hsn_code": "HSN code for the product category",
  "product_weight_in_gms": "Product weight in grams (number only)",
  "supplier_product_id": "A short unique SKU/product ID (e.g. SKU-001)",
  "category": "Meesho product category",
  "brand": "Brand name if mentioned, else empty string",
  "description": "A compelling 2-3 sentence product description for buyers"
}

Rules:
- All price/number fields must contain ONLY digits (no currency symbols, no units)
- If GST is not mentioned, infer from product type (clothing=5%, electronics=18%, home=12%)
- If HSN is not mentioned, infer from product category
- If weight is not mentioned, estimate based on product type
- Return ONLY the JSON object, no markdown, no explanation"#;

pub const TEXT_USER_PROMPT: &str = "Product description: {description}";

pub const TEXT_TEMPERATURE: f32 = 0.3;
pub const TEXT_MAX_TOKENS: u32 = 600;

// --- Image Listing Description ---
pub const IMAGE_SYSTEM_PROMPT: &str = r#"You are a Meesho product listing expert. Analyze the product image and generate a complete listing.
Return a detailed text description of the product including: name, color, material, style, use case, and suggested price range."#;

pub const IMAGE_USER_INSTRUCTION: &str =
    "Analyze this product image and generate a complete Meesho listing description.";

pub const IMAGE_TEMPERATURE: f32 = 0.4;
pub const IMAGE_MAX_TOKENS: u32 = 800;
