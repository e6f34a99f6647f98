// Guest service requests carrying a free-form status

use crate::guest::GuestHandle;

#[derive(Debug, Clone)]
pub struct ServiceRequest {
    request_id: u32,
    guest: GuestHandle,
    request_type: String,
    status: String,
}

impl ServiceRequest {
    pub fn new(
        request_id: u32,
        guest: GuestHandle,
        request_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            request_id,
            guest,
            request_type: request_type.into(),
            status: status.into(),
        }
    }

    pub fn get_request_id(&self) -> u32 {
        self.request_id
    }

    pub fn get_guest(&self) -> &GuestHandle {
        &self.guest
    }

    pub fn get_type(&self) -> &str {
        &self.request_type
    }

    pub fn set_type(&mut self, request_type: impl Into<String>) {
        self.request_type = request_type.into();
    }

    pub fn get_status(&self) -> &str {
        &self.status
    }

    // Any status string is accepted; there is no lifecycle to follow
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn submit_request(&self) -> String {
        tracing::debug!(request = self.request_id, kind = %self.request_type, "service request submitted");
        format!(
            "Service request '{}' submitted. Status: {}.",
            self.request_type, self.status
        )
    }
}
