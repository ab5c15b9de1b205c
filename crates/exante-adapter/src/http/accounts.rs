/*
[INPUT]:  Account identifiers and API version tags
[OUTPUT]: Typed account data (accounts list, summaries)
[POS]:    HTTP layer - account endpoints (bearer auth)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{ExanteClient, Result};
use crate::types::{AccountSummary, ApiVersion, UserAccount};

impl ExanteClient {
    /// Get the list of user accounts and their statuses
    ///
    /// GET /md/{version}/accounts
    pub async fn get_accounts(&self, version: ApiVersion) -> Result<Vec<UserAccount>> {
        let endpoint = format!("/md/{version}/accounts");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Get the account summary for a session date, converted to a currency
    ///
    /// GET /md/{version}/summary/{accountId}/{date}/{currency}
    pub async fn get_account_summary(
        &self,
        version: ApiVersion,
        account_id: &str,
        date: &str,
        currency: &str,
    ) -> Result<AccountSummary> {
        let endpoint = format!("/md/{version}/summary/{account_id}/{date}/{currency}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
