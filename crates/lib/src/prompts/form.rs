//! # Form-Fill Prompt
//!
//! The form-aware generator sends a single user message describing every
//! scanned field. The template below is filled with `{field_list}`,
//! `{description}` and `{fixed_values}`.

use crate::{
    errors::ListingError,
    types::{FormField, SellerProfile},
};
use regex::{Captures, Regex};

pub const FORM_TEMPERATURE: f32 = 0.3;
pub const FORM_MAX_TOKENS: u32 = 2500;

pub const FORM_FILL_PROMPT: &str = r#"You are a Meesho product listing expert. Generate accurate, SEO-rich listing data for the product described below.

The Meesho listing form has these fields (use EXACT selectors):
{field_list}

Product description: "{description}"

━━━━━━━━━━━━━━━━━━━━━━
FIXED VALUES: always use these exact values for matching fields:
{fixed_values}
- Brand Name: (DO NOT fill: leave blank, skip this field entirely)

━━━━━━━━━━━━━━━━━━━━━━
GENERATION RULES:

Product Name:
- SEO-rich marketplace title, EXACTLY 300 characters (use the FULL 300 character limit: pad with additional keywords, colors, use-cases, materials if needed)
- Include: Product Type + Material + Key Specs + Use-case + Color + Target Audience + Key Features
- NO brand names
- NO non-compliance words: you, everyday, home, homes, house, premium, safe, guaranteed, best, top
- Include high-intent SEO keywords, synonyms, and related search terms to fill all 300 characters

SKU ID: ST-<ProductType>-001 (e.g. ST-Kurti-001, ST-Dispenser-001)

HSN Code: Infer from product category (e.g. clothing=6211, kitchenware=7323, plastic items=3924)

GST: Always use 5 (number only, no % symbol: fixed value for all products)

Price (Meesho Price): Realistic market price in INR, digits only, no ₹ symbol

Weight: Realistic weight in grams, digits only

Packaging Dimensions: Realistic values based on product type and size

Product Dimensions: Realistic values based on product type and size

Description: EXACTLY 1400 characters (use the FULL 1400 character limit). Write a detailed, SEO-rich product description that includes:
- Product name and type
- Material and build quality
- Key features and specifications (at least 7-10 bullet-style points written as sentences)
- Usage scenarios and benefits
- Dimensions, capacity, or size details
- Care instructions or usage tips
- Target audience (women, men, kids, kitchen, office, travel, gifting, etc.)
- 40+ high-intent SEO keywords naturally woven in, covering product type synonyms, materials, colors and finishes, use cases, audiences, quality, shopping intent, occasions and trending marketplace search terms
- NO brand names. NO non-compliance words (you, everyday, home, homes, house, premium, safe, guaranteed, best, top).
- Must be exactly 1400 characters: count carefully and pad with additional keyword-rich sentences if needed.

For dropdown fields (type=select or type=dropdown): provide the most common valid option value that would appear in a Meesho dropdown (e.g. for Material: "Plastic", "Stainless Steel", "Cotton"; for Generic Name: the product type; for Net Quantity: "1"; for Packaging Unit: "cm" or "inch")

━━━━━━━━━━━━━━━━━━━━━━
Return ONLY a valid JSON array (no markdown, no explanation, no code fences):
[
  { "selector": "exact_selector_from_above", "value": "generated_value" }
]

IMPORTANT:
- Use the EXACT selectors from the field list above
- Do NOT include Brand Name field in output
- Do NOT include fields with empty or null values
- For number-only fields: digits only, no symbols or units"#;

/// Renders one scanned field as a line of the prompt's field list.
pub fn format_field_line(field: &FormField) -> String {
    let mut line = format!(
        "- Selector: \"{}\" | Label: \"{}\" | Type: {}",
        field.selector, field.label, field.field_type
    );
    if let Some(id) = field.id.as_deref().filter(|id| !id.is_empty()) {
        line.push_str(&format!(" | ID: {id}"));
    }
    line
}

fn fixed_values(seller: Option<&SellerProfile>) -> String {
    let mut lines = vec![
        "- Inventory / Stock: 100".to_string(),
        "- Variation / Size: Free Size".to_string(),
        "- Country of Origin: India".to_string(),
    ];
    if let Some(seller) = seller {
        for role in ["Manufacturer", "Packer", "Importer"] {
            lines.push(format!("- {role} Name: {}", seller.name));
            lines.push(format!("- {role} Address: {}", seller.address));
            lines.push(format!("- {role} Pincode: {}", seller.pincode));
        }
    }
    lines.push("- Group ID: GROUP 1".to_string());
    lines.join("\n")
}

/// Builds the complete form-fill prompt.
///
/// Placeholders are filled in a single pass over the template, so braces in
/// scanned labels or the description are never expanded.
pub fn build_form_prompt(
    description: &str,
    fields: &[FormField],
    seller: Option<&SellerProfile>,
) -> Result<String, ListingError> {
    let field_list = fields
        .iter()
        .map(format_field_line)
        .collect::<Vec<_>>()
        .join("\n");
    let fixed_values = fixed_values(seller);

    let re = Regex::new(r"\{(field_list|fixed_values|description)\}")?;
    let prompt = re.replace_all(FORM_FILL_PROMPT, |caps: &Captures| match &caps[1] {
        "field_list" => field_list.clone(),
        "fixed_values" => fixed_values.clone(),
        _ => description.trim().to_string(),
    });
    Ok(prompt.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_line_includes_optional_id() {
        let field = FormField {
            selector: "input[id=\"product_name\"]".to_string(),
            label: "Product Name".to_string(),
            field_type: "text".to_string(),
            id: Some("product_name".to_string()),
        };
        assert_eq!(
            format_field_line(&field),
            "- Selector: \"input[id=\"product_name\"]\" | Label: \"Product Name\" | Type: text | ID: product_name"
        );

        let no_id = FormField {
            id: None,
            ..field
        };
        assert!(!format_field_line(&no_id).contains("ID:"));
    }

    #[test]
    fn test_prompt_includes_seller_only_when_configured() {
        let fields = vec![FormField {
            selector: "#price".to_string(),
            label: "Price".to_string(),
            field_type: "number".to_string(),
            id: None,
        }];

        let without = build_form_prompt("  steel bottle ", &fields, None).unwrap();
        assert!(without.contains("Product description: \"steel bottle\""));
        assert!(without.contains("- Selector: \"#price\""));
        assert!(!without.contains("Manufacturer Name"));

        let seller = SellerProfile {
            name: "ACME TRADERS".to_string(),
            address: "MG ROAD, PUNE".to_string(),
            pincode: "411001".to_string(),
        };
        let with = build_form_prompt("steel bottle", &fields, Some(&seller)).unwrap();
        assert!(with.contains("- Manufacturer Name: ACME TRADERS"));
        assert!(with.contains("- Importer Pincode: 411001"));
        assert!(!with.contains("{fixed_values}"));
    }

    #[test]
    fn test_placeholders_in_scanned_labels_are_not_expanded() {
        let fields = vec![FormField {
            selector: "#weird-{description}".to_string(),
            label: "Notes {fixed_values}".to_string(),
            field_type: "text".to_string(),
            id: None,
        }];

        let prompt = build_form_prompt("steel bottle", &fields, None).unwrap();

        assert!(prompt.contains("- Selector: \"#weird-{description}\" | Label: \"Notes {fixed_values}\""));
        assert!(!prompt.contains("#weird-steel bottle"));
        assert_eq!(prompt.matches("- Group ID: GROUP 1").count(), 1);
    }
}
