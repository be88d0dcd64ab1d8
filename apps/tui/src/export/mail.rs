use std::process::Command;

use crate::export::ExportError;

/// Fixed subject for the draft.
pub const MAIL_SUBJECT: &str = "Cor Optima – mobilitetsskjema";

/// The fixed body template. Instructs the recipient to attach the separately
/// downloaded PDF.
pub fn mail_body() -> String {
    "Hei! Her er mobilitetsskjemaet. \
     Last ned PDF i appen (knappen \"Last ned PDF\") og legg den ved denne e-posten.\n\n\
     Mvh\nCor Optima"
        .to_string()
}

/// Builds a `mailto:` URI with percent-encoded recipient, subject and body.
/// An empty recipient is an error the caller reports before any URI exists.
pub fn build_mailto(recipient: &str, subject: &str) -> Result<String, ExportError> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ExportError::MissingRecipient);
    }

    Ok(format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(recipient),
        urlencoding::encode(subject),
        urlencoding::encode(&mail_body())
    ))
}

/// Hands the URI to the operating system's mail client. Best-effort: the
/// caller shows the URI regardless, so a missing opener is not an error.
pub fn open_mail_draft(uri: &str) -> bool {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    Command::new(opener)
        .arg(uri)
        .spawn()
        .map(|_| true)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_encodes_and_decodes_losslessly() -> Result<(), Box<dyn std::error::Error>> {
        let body = mail_body();
        let encoded = urlencoding::encode(&body).into_owned();
        let decoded = urlencoding::decode(&encoded)?;
        assert_eq!(decoded, body);
        Ok(())
    }

    #[test]
    fn subject_encodes_and_decodes_losslessly() -> Result<(), Box<dyn std::error::Error>> {
        let encoded = urlencoding::encode(MAIL_SUBJECT).into_owned();
        let decoded = urlencoding::decode(&encoded)?;
        assert_eq!(decoded, MAIL_SUBJECT);
        Ok(())
    }

    #[test]
    fn mailto_uri_is_fully_percent_encoded() -> Result<(), Box<dyn std::error::Error>> {
        let uri = build_mailto("kunde@example.com", MAIL_SUBJECT)?;
        assert!(uri.starts_with("mailto:kunde%40example.com?subject="));
        assert!(uri.contains("&body="));
        // Nothing after the scheme may carry raw spaces or newlines
        let (_, rest) = uri.split_once(':').ok_or("no scheme")?;
        assert!(!rest.contains(' '));
        assert!(!rest.contains('\n'));
        Ok(())
    }

    #[test]
    fn missing_recipient_is_rejected_before_building() {
        assert!(matches!(
            build_mailto("", MAIL_SUBJECT),
            Err(ExportError::MissingRecipient)
        ));
        assert!(matches!(
            build_mailto("   ", MAIL_SUBJECT),
            Err(ExportError::MissingRecipient)
        ));
    }
}
