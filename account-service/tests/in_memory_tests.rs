use account_service::{AccountRepository, InMemoryAccountRepository};
use common::decimal::dec;
use common::error::Error;
use common::model::account::{balance, Operation, OperationKind};

#[tokio::test]
async fn test_create_account() {
    let repo = InMemoryAccountRepository::new();
    assert!(repo.accounts.is_empty());

    // Create an account
    let account = repo
        .create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();

    assert_eq!(account.cpf, "12345678900");
    assert_eq!(account.name, "Ana");
    assert!(account.statement.is_empty());

    // Check it was added under its CPF
    assert_eq!(repo.accounts.len(), 1);
    assert!(repo.accounts.contains_key("12345678900"));
}

#[tokio::test]
async fn test_create_account_rejects_taken_cpf() {
    let repo = InMemoryAccountRepository::new();
    repo.create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();

    // A second account under the same CPF must be refused
    let err = repo
        .create_account("12345678900".to_string(), "Bia".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateAccount(_)));
    assert_eq!(repo.accounts.len(), 1);
}

#[tokio::test]
async fn test_find_by_cpf() {
    let repo = InMemoryAccountRepository::new();
    repo.create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();

    let found = repo.find_by_cpf("12345678900").await.unwrap();
    assert_eq!(found.unwrap().name, "Ana");

    // Unknown CPFs come back as None, not as an error
    let missing = repo.find_by_cpf("00000000000").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_append_operation_preserves_order() {
    let repo = InMemoryAccountRepository::new();
    repo.create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();

    // Append a mix of credits and debits
    repo.append_operation(
        "12345678900",
        Operation::credit(dec!(10), Some("salary".to_string())),
    )
    .await
    .unwrap();
    repo.append_operation("12345678900", Operation::debit(dec!(3)))
        .await
        .unwrap();
    repo.append_operation("12345678900", Operation::credit(dec!(5), None))
        .await
        .unwrap();

    let account = repo.find_by_cpf("12345678900").await.unwrap().unwrap();
    let kinds: Vec<OperationKind> = account.statement.iter().map(|o| o.kind).collect();

    assert_eq!(
        kinds,
        vec![
            OperationKind::Credit,
            OperationKind::Debit,
            OperationKind::Credit
        ]
    );
    assert_eq!(balance(&account.statement), dec!(12)); // 10 - 3 + 5
}

#[tokio::test]
async fn test_append_operation_to_unknown_account() {
    let repo = InMemoryAccountRepository::new();

    let err = repo
        .append_operation("00000000000", Operation::debit(dec!(1)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AccountNotFound(_)));
}

#[tokio::test]
async fn test_update_name() {
    let repo = InMemoryAccountRepository::new();
    repo.create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();

    repo.update_name("12345678900", "Ana Maria".to_string())
        .await
        .unwrap();

    let account = repo.find_by_cpf("12345678900").await.unwrap().unwrap();
    assert_eq!(account.name, "Ana Maria");
}

#[tokio::test]
async fn test_remove_deletes_only_the_target_account() {
    let repo = InMemoryAccountRepository::new();
    repo.create_account("12345678900".to_string(), "Ana".to_string())
        .await
        .unwrap();
    repo.create_account("98765432100".to_string(), "Bia".to_string())
        .await
        .unwrap();

    repo.remove("12345678900").await.unwrap();

    // Only the removed CPF is gone
    let remaining = repo.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].cpf, "98765432100");

    // Removing again reports the account as missing
    let err = repo.remove("12345678900").await.unwrap_err();
    assert!(matches!(err, Error::AccountNotFound(_)));
}
