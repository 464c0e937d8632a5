use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType,
    Projection, ProjectionType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};
use tracing::{debug, info};

use crate::models::account::Account;
use crate::repositories::errors::account_repository_errors::AccountRepositoryError;

#[cfg(test)]
use mockall::automock;

pub const POLICY_NUMBER_INDEX: &str = "GSI_AccountByPolicyNumber";

const TABLE_READY_ATTEMPTS: u32 = 30;
const TABLE_READY_INTERVAL: Duration = Duration::from_millis(500);

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates the accounts table (and its policy-number index) when absent.
    async fn ensure_table(&self) -> Result<(), AccountRepositoryError>;
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Account, AccountRepositoryError>;
    async fn get_account_by_policy_number(
        &self,
        policy_number: &str,
    ) -> Result<Account, AccountRepositoryError>;
    /// Writes the full item, replacing any existing item with the same username.
    async fn put_account(&self, account: &Account) -> Result<(), AccountRepositoryError>;
}

pub struct DynamoDbAccountRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbAccountRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    async fn table_status(&self) -> Result<Option<TableStatus>, AccountRepositoryError> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(output) => Ok(output.table().and_then(|t| t.table_status()).cloned()),
            Err(e) => {
                if e.as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception())
                {
                    Ok(None)
                } else {
                    Err(AccountRepositoryError::DynamoDb(e.to_string()))
                }
            }
        }
    }

    async fn create_table(&self) -> Result<(), AccountRepositoryError> {
        let build_err = |e: aws_sdk_dynamodb::error::BuildError| {
            AccountRepositoryError::DynamoDb(e.to_string())
        };

        let username_attr = AttributeDefinition::builder()
            .attribute_name("username")
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(build_err)?;
        let policy_number_attr = AttributeDefinition::builder()
            .attribute_name("policy_number")
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(build_err)?;
        let username_key = KeySchemaElement::builder()
            .attribute_name("username")
            .key_type(KeyType::Hash)
            .build()
            .map_err(build_err)?;
        let policy_number_key = KeySchemaElement::builder()
            .attribute_name("policy_number")
            .key_type(KeyType::Hash)
            .build()
            .map_err(build_err)?;
        let policy_number_index = GlobalSecondaryIndex::builder()
            .index_name(POLICY_NUMBER_INDEX)
            .key_schema(policy_number_key)
            .projection(
                Projection::builder()
                    .projection_type(ProjectionType::All)
                    .build(),
            )
            .build()
            .map_err(build_err)?;

        let result = self
            .client
            .create_table()
            .table_name(&self.table_name)
            .attribute_definitions(username_attr)
            .attribute_definitions(policy_number_attr)
            .key_schema(username_key)
            .global_secondary_indexes(policy_number_index)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            // Another process created it between describe and create.
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_resource_in_use_exception()) =>
            {
                Ok(())
            }
            Err(e) => Err(AccountRepositoryError::DynamoDb(e.to_string())),
        }
    }
}

#[async_trait]
impl AccountRepository for DynamoDbAccountRepository {
    async fn ensure_table(&self) -> Result<(), AccountRepositoryError> {
        if self.table_status().await?.is_none() {
            info!("Creating accounts table {}", self.table_name);
            self.create_table().await?;
        }

        for _ in 0..TABLE_READY_ATTEMPTS {
            match self.table_status().await? {
                Some(TableStatus::Active) => {
                    debug!("Accounts table {} is active", self.table_name);
                    return Ok(());
                }
                status => {
                    debug!(
                        "Waiting for accounts table {} (status: {:?})",
                        self.table_name, status
                    );
                    tokio::time::sleep(TABLE_READY_INTERVAL).await;
                }
            }
        }
        Err(AccountRepositoryError::TableNotReady(self.table_name.clone()))
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Account, AccountRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "username",
                to_attribute_value(username)
                    .map_err(|e| AccountRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| AccountRepositoryError::DynamoDb(e.to_string()))?;
        if let Some(item) = output.item {
            let account: Account = from_item(item)
                .map_err(|e| AccountRepositoryError::Serialization(e.to_string()))?;
            Ok(account)
        } else {
            Err(AccountRepositoryError::NotFound)
        }
    }

    async fn get_account_by_policy_number(
        &self,
        policy_number: &str,
    ) -> Result<Account, AccountRepositoryError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(POLICY_NUMBER_INDEX)
            .key_condition_expression("policy_number = :policy_number")
            .expression_attribute_values(
                ":policy_number",
                to_attribute_value(policy_number)
                    .map_err(|e| AccountRepositoryError::Serialization(e.to_string()))?,
            )
            .limit(1)
            .send()
            .await
            .map_err(|e| AccountRepositoryError::DynamoDb(e.to_string()))?;
        match output.items.and_then(|items| items.into_iter().next()) {
            Some(item) => {
                from_item(item).map_err(|e| AccountRepositoryError::Serialization(e.to_string()))
            }
            None => Err(AccountRepositoryError::NotFound),
        }
    }

    async fn put_account(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let item =
            to_item(account).map_err(|e| AccountRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| AccountRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }
}
