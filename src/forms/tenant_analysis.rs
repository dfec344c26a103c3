use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::api::tenant_analysis::NewAnalysisRequest;
use crate::domain::types::{EmailAddress, PhoneNumber, TypeConstraintError};

/// Form opening a tenant analysis request.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalysisRequestForm {
    #[validate(length(min = 1, message = "tenant name is required"))]
    pub tenant_name: String,
    #[validate(email)]
    pub tenant_email: String,
    pub tenant_phone: Option<String>,
    #[validate(length(min = 1, message = "document number is required"))]
    pub document: String,
    /// Kept as text because browsers submit empty number inputs as `""`.
    pub monthly_income: Option<String>,
}

impl AnalysisRequestForm {
    /// Normalizes the validated form into the backend payload.
    pub fn to_request(&self) -> Result<NewAnalysisRequest, TypeConstraintError> {
        let tenant_phone = match self.tenant_phone.as_deref() {
            Some(phone) if !phone.trim().is_empty() => {
                Some(PhoneNumber::new(phone)?.into_inner())
            }
            _ => None,
        };

        let monthly_income = self
            .monthly_income
            .as_deref()
            .and_then(|income| income.trim().parse().ok());

        Ok(NewAnalysisRequest {
            tenant_name: self.tenant_name.trim().to_string(),
            tenant_email: EmailAddress::new(&self.tenant_email)?.into_inner(),
            tenant_phone,
            document: self.document.trim().to_string(),
            monthly_income,
        })
    }
}

/// Multipart upload of a supporting document for an analysis request.
#[derive(MultipartForm)]
pub struct UploadAnalysisDocumentForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}

impl UploadAnalysisDocumentForm {
    /// Reads the buffered upload back into memory for the backend call.
    pub fn read(&mut self) -> std::io::Result<(String, String, Vec<u8>)> {
        use std::io::{Read, Seek};

        let file_name = self
            .file
            .file_name
            .clone()
            .unwrap_or_else(|| "document".to_string());
        let content_type = self
            .file
            .content_type
            .as_ref()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        self.file.file.rewind()?;
        self.file.file.read_to_end(&mut bytes)?;
        Ok((file_name, content_type, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_contact_fields() {
        let form = AnalysisRequestForm {
            tenant_name: "  Maria Souza ".into(),
            tenant_email: "Maria@Example.com".into(),
            tenant_phone: Some("+1 415 555 2671".into()),
            document: " 123.456.789-00 ".into(),
            monthly_income: Some("5200".into()),
        };
        assert!(form.validate().is_ok());

        let request = form.to_request().unwrap();
        assert_eq!(request.tenant_name, "Maria Souza");
        assert_eq!(request.tenant_email, "maria@example.com");
        assert_eq!(request.tenant_phone.as_deref(), Some("+14155552671"));
        assert_eq!(request.document, "123.456.789-00");
        assert_eq!(request.monthly_income, Some(5200));
    }

    #[test]
    fn blank_income_is_dropped() {
        let form = AnalysisRequestForm {
            tenant_name: "Maria".into(),
            tenant_email: "maria@example.com".into(),
            tenant_phone: None,
            document: "123".into(),
            monthly_income: Some("".into()),
        };
        assert_eq!(form.to_request().unwrap().monthly_income, None);
    }

    #[test]
    fn blank_phone_is_dropped() {
        let form = AnalysisRequestForm {
            tenant_name: "Maria".into(),
            tenant_email: "maria@example.com".into(),
            tenant_phone: Some("  ".into()),
            document: "123".into(),
            monthly_income: None,
        };
        assert_eq!(form.to_request().unwrap().tenant_phone, None);
    }

    #[test]
    fn invalid_email_fails_validation() {
        let form = AnalysisRequestForm {
            tenant_name: "Maria".into(),
            tenant_email: "not-an-email".into(),
            tenant_phone: None,
            document: "123".into(),
            monthly_income: None,
        };
        assert!(form.validate().is_err());
    }
}
