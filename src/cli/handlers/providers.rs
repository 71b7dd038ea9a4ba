//! Providers command handler

use std::io::Write;

use crate::error::AppResult;
use crate::models::ProviderName;
use crate::services::NotificationService;

/// Handler for the providers command
pub struct ProvidersCommandHandler<'a> {
    service: &'a NotificationService,
}

impl<'a> ProvidersCommandHandler<'a> {
    pub fn new(service: &'a NotificationService) -> Self {
        Self { service }
    }

    pub async fn execute(&self, out: &mut dyn Write) -> AppResult<()> {
        let status = self.service.provider_status().await;
        out.write_all(render_status(&status).as_bytes())?;
        Ok(())
    }
}

pub fn render_status(status: &[(ProviderName, bool)]) -> String {
    let mut text = String::from("📋 Providers:\n");
    for (provider, configured) in status {
        let state = if *configured {
            "✅ configured"
        } else {
            "❌ not configured"
        };
        text.push_str(&format!("  {:<10} {state}\n", provider.as_str()));
    }
    if status.iter().all(|(_, configured)| !configured) {
        text.push_str("\nRun 'notify setup' to configure a provider.\n");
    }
    text
}
