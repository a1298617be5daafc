pub const CONFIRMATION_SUBJECT: &str = "You're on the Welco waitlist";

/// The confirmation email sent after a waitlist signup. One fixed subject and
/// body; the recipient address is the only per-signup value.
pub fn waitlist_confirmation() -> (String, String) {
    let html = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0; font-family: system-ui, -apple-system, sans-serif; background: #f8fafc; padding: 24px;">
  <div style="max-width: 480px; margin: 0 auto; background: #fff; border-radius: 12px; padding: 32px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);">
    <p style="margin: 0 0 16px; font-size: 16px; color: #1e293b;">
      Hi there,
    </p>
    <p style="margin: 0 0 16px; font-size: 16px; line-height: 1.6; color: #475569;">
      Thanks for joining the Welco waitlist. We really appreciate your interest.
    </p>
    <p style="margin: 0 0 24px; font-size: 16px; line-height: 1.6; color: #475569;">
      We’ll be in touch as soon as early access is ready. Until then, you’re on the list and we’ll notify you first.
    </p>
    <p style="margin: 0; font-size: 15px; color: #64748b;">
      — The Welco team
    </p>
  </div>
</body>
</html>"#;

    (CONFIRMATION_SUBJECT.to_string(), html.to_string())
}
