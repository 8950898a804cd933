//! Order summary rendering for the two delivery channels.
//!
//! The same booking is rendered twice: compact HTML-lite markup for the
//! Telegram bot (`parse_mode=HTML` understands `<b>` only) and a styled
//! standalone HTML document for email clients.

use serde::Deserialize;

/// Placeholder for fields the caller left blank.
const NOT_SPECIFIED: &str = "not specified";

/// The order fields the notification message draws on.
///
/// Deserialized leniently from whatever order payload the caller posts;
/// every field is optional and missing values render as a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderSummary {
    pub id: Option<serde_json::Value>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub service_type: Option<String>,
    pub pickup_address: Option<String>,
    pub destination_address: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub estimated_price: Option<serde_json::Value>,
    pub comments: Option<String>,
}

/// A string field, or the placeholder.
fn text(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// A numeric-or-string JSON field rendered without quoting.
fn scalar(value: &Option<serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => NOT_SPECIFIED.to_string(),
        Some(serde_json::Value::String(s)) if s.is_empty() => NOT_SPECIFIED.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render the compact Telegram message.
pub fn telegram_text(order: &OrderSummary) -> String {
    let mut message = format!(
        "\u{1F514} <b>New ZooTaxi booking</b>\n\n\
         \u{1F464} <b>Client:</b> {client}\n\
         \u{1F4DE} <b>Phone:</b> {phone}\n\n\
         \u{1F43E} <b>Pet:</b> {pet} ({pet_type})\n\
         \u{1F697} <b>Service:</b> {service}\n\n\
         \u{1F4CD} <b>From:</b> {pickup}\n\
         \u{1F4CD} <b>To:</b> {destination}\n\n\
         \u{1F4C5} <b>Date:</b> {date} at {time}\n\n\
         \u{1F4B0} <b>Price:</b> {price} \u{20BD}",
        client = text(&order.client_name),
        phone = text(&order.client_phone),
        pet = text(&order.pet_name),
        pet_type = text(&order.pet_type),
        service = text(&order.service_type),
        pickup = text(&order.pickup_address),
        destination = text(&order.destination_address),
        date = text(&order.preferred_date),
        time = text(&order.preferred_time),
        price = scalar(&order.estimated_price),
    );

    if let Some(comments) = order.comments.as_deref().filter(|c| !c.is_empty()) {
        message.push_str(&format!("\n\u{1F4AC} <b>Comment:</b> {comments}"));
    }

    message
}

/// Render the email subject line.
pub fn email_subject(order: &OrderSummary) -> String {
    let id = scalar(&order.id);
    let id = if id == NOT_SPECIFIED { "N/A".to_string() } else { id };
    let client = order.client_name.as_deref().unwrap_or("Client");
    format!("New booking #{id} - {client}")
}

/// Render the styled HTML email body.
pub fn email_html(order: &OrderSummary) -> String {
    let field = |label: &str, value: &str| {
        format!(
            "<div class=\"field\"><div class=\"label\">{label}</div>\
             <div class=\"value\">{value}</div></div>\n"
        )
    };

    let mut fields = String::new();
    fields.push_str(&field("\u{1F464} Client:", text(&order.client_name)));
    fields.push_str(&field("\u{1F4DE} Phone:", text(&order.client_phone)));
    fields.push_str(&field(
        "\u{1F43E} Pet:",
        &format!("{} ({})", text(&order.pet_name), text(&order.pet_type)),
    ));
    fields.push_str(&field("\u{1F697} Service:", text(&order.service_type)));
    fields.push_str(&field("\u{1F4CD} From:", text(&order.pickup_address)));
    fields.push_str(&field("\u{1F4CD} To:", text(&order.destination_address)));
    fields.push_str(&field(
        "\u{1F4C5} Date and time:",
        &format!(
            "{} at {}",
            text(&order.preferred_date),
            text(&order.preferred_time)
        ),
    ));
    fields.push_str(&field(
        "\u{1F4B0} Estimated price:",
        &format!("{} \u{20BD}", scalar(&order.estimated_price)),
    ));
    if let Some(comments) = order.comments.as_deref().filter(|c| !c.is_empty()) {
        fields.push_str(&field("\u{1F4AC} Comment:", comments));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n\
         body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}\n\
         .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}\n\
         .header {{ background: #2563eb; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }}\n\
         .content {{ background: #f9fafb; padding: 20px; border-radius: 0 0 8px 8px; }}\n\
         .field {{ margin-bottom: 15px; }}\n\
         .label {{ font-weight: bold; color: #2563eb; }}\n\
         .value {{ margin-top: 5px; }}\n\
         .footer {{ margin-top: 20px; padding: 15px; background: #e5e7eb; text-align: center; font-size: 12px; color: #6b7280; border-radius: 8px; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <div class=\"header\"><h2>\u{1F697} New ZooTaxi booking</h2></div>\n\
         <div class=\"content\">\n{fields}</div>\n\
         <div class=\"footer\">This is an automated notification from the ZooTaxi booking system</div>\n\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}
