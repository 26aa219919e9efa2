//! HTML bodies for the transactional emails.
//!
//! Rendered with `format!`; every interpolated value goes through
//! [`escape_html`] since enquiry fields are caller-controlled.

use crate::domain::{ContactMessage, Enquiry};

/// Minimal HTML entity escaping for interpolated user input.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_not_provided(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape_html(v),
        _ => "Not provided".to_string(),
    }
}

/// Admin-facing enquiry notification.
pub fn enquiry_to_admin(enquiry: &Enquiry) -> String {
    let name = escape_html(&enquiry.name);
    let email = escape_html(&enquiry.email);
    let phone = escape_html(&enquiry.phone);
    let address = or_not_provided(enquiry.address.as_deref());
    let product_name = match enquiry.product_name.as_deref() {
        Some(p) if !p.trim().is_empty() => escape_html(p),
        _ => "General enquiry".to_string(),
    };
    let product_id_row = match enquiry.product_id.as_deref() {
        Some(id) if !id.trim().is_empty() => format!(
            r#"<div class="value" style="font-size:12px;color:#999;">Product ID: {}</div>"#,
            escape_html(id)
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>New Product Enquiry - Banty Car Accessories</title>
    <style>
        body {{ background-color: #f5f5f5; font-family: Arial, sans-serif; font-size: 16px; line-height: 1.6; color: #333; margin: 0; padding: 0; }}
        .container {{ max-width: 600px; margin: 20px auto; background: #fff; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); overflow: hidden; }}
        .header {{ background: linear-gradient(135deg, #f97316, #ef4444); color: #fff; padding: 20px; text-align: center; }}
        .header h1 {{ margin: 0; font-size: 22px; }}
        .content {{ padding: 30px; }}
        .field {{ margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid #eee; }}
        .label {{ font-weight: bold; color: #0f172a; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; }}
        .value {{ color: #555; margin-top: 4px; font-size: 15px; }}
        .product-box {{ background: #f9fafb; padding: 12px; border-radius: 6px; border-left: 4px solid #f97316; margin-top: 8px; }}
        .footer {{ background: #f5f5f5; padding: 16px; text-align: center; font-size: 12px; color: #999; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header"><h1>New Product Enquiry</h1></div>
        <div class="content">
            <div class="field">
                <span class="label">Customer name</span>
                <div class="value">{name}</div>
            </div>
            <div class="field">
                <span class="label">Email</span>
                <div class="value"><a href="mailto:{email}">{email}</a></div>
            </div>
            <div class="field">
                <span class="label">Phone</span>
                <div class="value"><a href="tel:{phone}">{phone}</a></div>
            </div>
            <div class="field">
                <span class="label">Address</span>
                <div class="value">{address}</div>
            </div>
            <div class="field">
                <span class="label">Product</span>
                <div class="product-box">
                    <div class="value">{product_name}</div>
                    {product_id_row}
                </div>
            </div>
        </div>
        <div class="footer">
            <p>Banty Car Accessories admin notification</p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// Customer-facing acknowledgment for a received enquiry.
pub fn enquiry_auto_reply(customer_name: &str, contact_phone: &str) -> String {
    let name = if customer_name.trim().is_empty() {
        "Customer".to_string()
    } else {
        escape_html(customer_name)
    };
    let phone = if contact_phone.trim().is_empty() {
        "9876543210".to_string()
    } else {
        escape_html(contact_phone)
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>We received your enquiry - Banty Car Accessories</title>
    <style>
        body {{ background-color: #f5f5f5; font-family: Arial, sans-serif; font-size: 16px; line-height: 1.6; color: #333; margin: 0; padding: 0; }}
        .container {{ max-width: 600px; margin: 20px auto; background: #fff; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); overflow: hidden; }}
        .header {{ background: linear-gradient(135deg, #0f172a, #1e293b); color: #fff; padding: 24px; text-align: center; }}
        .header h1 {{ margin: 0; font-size: 22px; }}
        .content {{ padding: 30px; }}
        .message {{ font-size: 16px; color: #334155; margin-bottom: 20px; }}
        .phone {{ display: inline-block; background: #f97316; color: #fff; padding: 10px 20px; border-radius: 8px; font-size: 18px; font-weight: bold; margin: 16px 0; letter-spacing: 1px; }}
        .footer {{ background: #f8fafc; padding: 16px; text-align: center; font-size: 12px; color: #64748b; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header"><h1>Banty Car Accessories</h1></div>
        <div class="content">
            <p class="message">Dear {name},</p>
            <p class="message">Thank you for your enquiry. We have received your request and our team will get back to you shortly.</p>
            <p class="message">If your enquiry is urgent, you can call us directly on:</p>
            <p class="phone">{phone}</p>
            <p class="message">We look forward to assisting you with your car accessories needs.</p>
        </div>
        <div class="footer">
            <p>Banty Car Accessories &ndash; Premium car accessories for enthusiasts</p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// Admin-facing legacy contact-form notification.
pub fn contact_form_submission(contact: &ContactMessage) -> String {
    let name = escape_html(&contact.name);
    let email = escape_html(&contact.email);
    let company = or_not_provided(contact.company.as_deref());
    let message = escape_html(&contact.message);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>New Contact Form Submission</title>
    <style>
        body {{ background-color: #f5f5f5; font-family: Arial, sans-serif; font-size: 16px; line-height: 1.6; color: #333333; margin: 0; padding: 0; }}
        .container {{ max-width: 600px; margin: 20px auto; background-color: #ffffff; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); overflow: hidden; }}
        .header {{ background-color: #031D33; color: #ffffff; padding: 20px; text-align: center; }}
        .header h1 {{ margin: 0; font-size: 24px; }}
        .content {{ padding: 30px; }}
        .field {{ margin-bottom: 20px; padding-bottom: 15px; border-bottom: 1px solid #eee; }}
        .label {{ font-weight: bold; color: #031D33; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; }}
        .value {{ color: #555; margin-top: 4px; font-size: 15px; }}
        .footer {{ background: #f5f5f5; padding: 16px; text-align: center; font-size: 12px; color: #999; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header"><h1>New Contact Form Submission</h1></div>
        <div class="content">
            <div class="field">
                <span class="label">Name</span>
                <div class="value">{name}</div>
            </div>
            <div class="field">
                <span class="label">Email</span>
                <div class="value"><a href="mailto:{email}">{email}</a></div>
            </div>
            <div class="field">
                <span class="label">Company</span>
                <div class="value">{company}</div>
            </div>
            <div class="field">
                <span class="label">Message</span>
                <div class="value">{message}</div>
            </div>
        </div>
        <div class="footer">
            <p>Banty Car Accessories website contact form</p>
        </div>
    </div>
</body>
</html>"#
    )
}
