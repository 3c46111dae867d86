//! # Form-Fill Post-Processing
//!
//! Turns the model's `[{selector, value}]` answer into the values sent back to
//! the browser extension: drops unusable entries, forces the product name and
//! description to the marketplace's exact lengths, and derives MRP and the
//! wrong-return price from the selling price.

use crate::{errors::ListingError, fields::coerce_to_string, types::FormFieldValue};
use serde_json::Value;
use std::borrow::Cow;

pub const PRODUCT_NAME_LENGTH: usize = 300;
pub const DESCRIPTION_LENGTH: usize = 1400;

pub const WRONG_RETURN_SELECTOR: &str = "input[id=\"only_wrong_return_price\"]";
pub const MRP_SELECTOR: &str = "input[id=\"product_mrp\"]";

const NAME_KEYWORDS: [&str; 20] = [
    "Durable Quality",
    "Long Lasting",
    "Easy to Use",
    "Lightweight Design",
    "Compact Size",
    "Multi Purpose",
    "Versatile Product",
    "Modern Style",
    "Attractive Look",
    "Great Value",
    "Functional Design",
    "Practical Use",
    "Quality Material",
    "Reliable Product",
    "Stylish Finish",
    "Smooth Texture",
    "Sturdy Build",
    "Eco Friendly",
    "Washable Material",
    "Reusable Design",
];

const DESCRIPTION_SENTENCES: [&str; 30] = [
    " This product is crafted with attention to detail, ensuring durability and long-lasting performance for daily use.",
    " The ergonomic design ensures comfortable handling and ease of use for all users across different age groups.",
    " Made from high-quality materials, this product meets strict quality standards and delivers consistent results.",
    " The compact and lightweight design makes it easy to store and carry, perfect for travel and outdoor use.",
    " Easy to clean and maintain, ensuring hygiene and longevity of the product with minimal effort required.",
    " Available in attractive designs, this product enhances the visual appeal of any space it is placed in.",
    " A reliable and affordable choice for those seeking quality, value, and functionality in a single product.",
    " Suitable for gifting on occasions like birthdays, anniversaries, and festivals, making it a thoughtful choice.",
    " The product undergoes rigorous quality checks to ensure it meets the highest standards before reaching customers.",
    " Order now and experience the perfect blend of style, functionality, and durability in this exceptional product.",
    " Ideal for indoor and outdoor use, this versatile product adapts to a wide range of settings and requirements.",
    " The smooth finish and polished look make it an attractive addition to any collection or living space.",
    " Designed for long-term use, this product resists wear and tear, maintaining its original quality over time.",
    " A must-have product for modern households, combining practicality with an elegant and contemporary aesthetic.",
    " The thoughtful construction ensures that every component works seamlessly together for optimal performance.",
    " Trusted by thousands of satisfied customers, this product has earned a reputation for reliability and value.",
    " Whether used professionally or casually, this product delivers consistent, high-quality results every time.",
    " The innovative design incorporates user feedback to provide an improved and more intuitive experience.",
    " Packaged securely to prevent damage during transit, ensuring the product arrives in perfect condition.",
    " This product is an excellent value-for-money option, offering features typically found in higher-priced alternatives.",
    " Crafted using eco-conscious manufacturing processes, this product is a responsible choice for mindful shoppers.",
    " The non-toxic, food-grade, and skin-safe materials make it suitable for use by children and adults alike.",
    " With its multi-functional design, this product eliminates the need for multiple separate items, saving space and cost.",
    " The rust-proof, waterproof, and stain-resistant surface ensures the product remains pristine even after extended use.",
    " Lightweight yet sturdy, this product strikes the perfect balance between portability and structural integrity.",
    " Designed to meet Indian household needs, this product is tailored for local preferences and usage patterns.",
    " The vibrant color options and modern patterns make this product a stylish and eye-catching choice.",
    " Backed by a quality assurance process, every unit is inspected before dispatch to ensure customer satisfaction.",
    " This product makes an ideal return gift, corporate gift, or festive hamper addition for all occasions.",
    " The wide compatibility and universal design ensure this product works seamlessly across various use cases.",
];

fn truncate_chars(text: &str, len: usize) -> String {
    text.chars().take(len).collect()
}

/// Pads `text` with `additions` until it is exactly `target` characters long.
///
/// Whole additions are appended while they fit. The first one that does not
/// fit is appended partially only if more than `min_partial` characters
/// remain. Spaces fill whatever is left. Longer input is truncated and empty
/// input is returned unchanged.
fn pad_to_length<'a>(
    text: &str,
    target: usize,
    additions: impl IntoIterator<Item = Cow<'a, str>>,
    min_partial: usize,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut len = text.chars().count();
    if len >= target {
        return truncate_chars(text, target);
    }

    let mut padded = text.to_string();
    for addition in additions {
        if len >= target {
            break;
        }
        let add_len = addition.chars().count();
        if len + add_len <= target {
            padded.push_str(&addition);
            len += add_len;
        } else {
            let remaining = target - len;
            if remaining > min_partial {
                padded.push_str(&truncate_chars(&addition, remaining));
                len += remaining;
            }
            break;
        }
    }

    padded.extend(std::iter::repeat(' ').take(target.saturating_sub(len)));
    padded
}

/// Pads or truncates a product name to exactly `target` characters using SEO keywords.
pub fn enforce_product_name_length(name: &str, target: usize) -> String {
    let additions = NAME_KEYWORDS
        .iter()
        .map(|kw| Cow::Owned(format!(", {kw}")));
    pad_to_length(name, target, additions, 3)
}

/// Pads or truncates a description to exactly `target` characters using filler sentences.
pub fn enforce_description_length(description: &str, target: usize) -> String {
    let additions = DESCRIPTION_SENTENCES.iter().map(|s| Cow::Borrowed(*s));
    pad_to_length(description, target, additions, 10)
}

fn is_product_name(field: &FormFieldValue, label: &str) -> bool {
    field.selector.contains("product_name") || label.contains("product name")
}

fn is_description(field: &FormFieldValue, label: &str) -> bool {
    let selector = field.selector.to_lowercase();
    selector.contains("description")
        || label.contains("description")
        || selector.contains("textarea")
}

/// Parses the leading digits of a price value, e.g. `"499"` or `"499 INR"`.
fn parse_price(value: &str) -> Option<u64> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|p| *p > 0)
}

fn set_or_push(fields: &mut Vec<FormFieldValue>, selector_key: &str, fallback: FormFieldValue) {
    match fields.iter_mut().find(|f| f.selector.contains(selector_key)) {
        Some(existing) => existing.value = fallback.value,
        None => fields.push(fallback),
    }
}

/// Derives the wrong-return price (`price - 1`) and MRP (`price * 4`) from the Meesho price.
pub fn apply_price_rules(fields: &mut Vec<FormFieldValue>) {
    let price = fields
        .iter()
        .find(|f| {
            let label = f.label.as_deref().unwrap_or_default().to_lowercase();
            f.selector.contains("meesho_price") || label.contains("meesho price")
        })
        .and_then(|f| parse_price(&f.value));

    let Some(price) = price else {
        return;
    };

    set_or_push(
        fields,
        "only_wrong_return_price",
        FormFieldValue {
            selector: WRONG_RETURN_SELECTOR.to_string(),
            value: (price - 1).to_string(),
            label: Some("Wrong/Defective Returns Price".to_string()),
        },
    );
    if let Some(mrp) = price.checked_mul(4) {
        set_or_push(
            fields,
            "product_mrp",
            FormFieldValue {
                selector: MRP_SELECTOR.to_string(),
                value: mrp.to_string(),
                label: Some("MRP".to_string()),
            },
        );
    }
}

fn entry_from_value(entry: &Value) -> Option<FormFieldValue> {
    let object = entry.as_object()?;
    let selector = object.get("selector").map(coerce_to_string)?;
    let value = object.get("value").map(coerce_to_string)?;
    if selector.is_empty() || value.is_empty() {
        return None;
    }
    let label = object
        .get("label")
        .map(coerce_to_string)
        .filter(|l| !l.is_empty());
    Some(FormFieldValue {
        selector,
        value,
        label,
    })
}

/// Post-processes a parsed form-fill completion.
pub fn postprocess_form_fill(parsed: &Value) -> Result<Vec<FormFieldValue>, ListingError> {
    let entries = parsed.as_array().ok_or_else(|| {
        ListingError::AiResponseFormat(
            "AI returned unexpected format: expected a JSON array".to_string(),
        )
    })?;

    let mut fields: Vec<FormFieldValue> = entries
        .iter()
        .filter_map(entry_from_value)
        .map(|mut field| {
            let label = field.label.as_deref().unwrap_or_default().to_lowercase();
            if is_product_name(&field, &label) {
                field.value = enforce_product_name_length(&field.value, PRODUCT_NAME_LENGTH);
            }
            if is_description(&field, &label) {
                field.value = enforce_description_length(&field.value, DESCRIPTION_LENGTH);
            }
            field
        })
        .collect();

    apply_price_rules(&mut fields);
    Ok(fields)
}
