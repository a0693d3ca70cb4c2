//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Each test provisions a temporary database cloned from a migrated
//! template. Setup is synchronous and happens outside any async runtime;
//! repository calls are driven by a runtime owned by the test context.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::rstest;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use user_service::Trace;
use user_service::domain::ports::{UserPersistenceError, UserRepository};
use user_service::domain::{NewUser, User, UserChanges, UserId};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users;
use user_service::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

mod support;

use support::embedded_postgres::drop_user_table;
use support::{handle_cluster_setup_failure, provision_template_database, shared_cluster};

struct TestContext {
    repository: DieselUserRepository,
    runtime: Runtime,
    database_url: String,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}

fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster()?;
    provision_template_database(cluster).map_err(|err| err.to_string())
}

fn pool_config(url: &str) -> PoolConfig {
    PoolConfig::new(url).with_max_size(2).with_min_idle(Some(1))
}

fn setup_test_context() -> Result<TestContext, String> {
    let database = provision_database()?;
    let database_url = database.url().to_owned();
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(pool_config(&database_url)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        repository: DieselUserRepository::new(pool),
        runtime,
        database_url,
        _database: database,
    })
}

fn context_or_skip() -> Option<TestContext> {
    setup_test_context().map_or_else(handle_cluster_setup_failure, Some)
}

fn insert(ctx: &TestContext, name: &str, last_name: &str) -> User {
    ctx.block_on(ctx.repository.insert(&NewUser::new(name, last_name)))
        .expect("insert succeeds")
}

#[rstest]
fn insert_returns_row_with_serial_id() {
    let Some(ctx) = context_or_skip() else {
        return;
    };

    let first = insert(&ctx, "Ada", "Lovelace");
    let second = insert(&ctx, "Alan", "Turing");

    assert_eq!(first, User::new(UserId::new(1), "Ada", "Lovelace"));
    assert_eq!(second.id(), UserId::new(2));
}

#[rstest]
fn list_returns_rows_ordered_by_id() {
    let Some(ctx) = context_or_skip() else {
        return;
    };
    for (name, last_name) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper")] {
        insert(&ctx, name, last_name);
    }
    ctx.block_on(ctx.repository.delete(UserId::new(2)))
        .expect("delete succeeds");

    let users = ctx.block_on(ctx.repository.list()).expect("list succeeds");

    let ids: Vec<i32> = users.iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[rstest]
fn find_by_id_distinguishes_present_and_absent() {
    let Some(ctx) = context_or_skip() else {
        return;
    };
    let stored = insert(&ctx, "Ada", "Lovelace");

    let found = ctx
        .block_on(ctx.repository.find_by_id(stored.id()))
        .expect("find succeeds");
    let missing = ctx
        .block_on(ctx.repository.find_by_id(UserId::new(404)))
        .expect("find succeeds");

    assert_eq!(found, Some(stored));
    assert_eq!(missing, None);
}

#[rstest]
fn update_writes_only_supplied_columns() {
    let Some(ctx) = context_or_skip() else {
        return;
    };
    let stored = insert(&ctx, "Ada", "Lovelace");

    let rows = ctx
        .block_on(
            ctx.repository
                .update(stored.id(), &UserChanges::default().with_last_name("King")),
        )
        .expect("update succeeds");
    let reloaded = ctx
        .block_on(ctx.repository.find_by_id(stored.id()))
        .expect("find succeeds")
        .expect("user still present");

    assert_eq!(rows, 1);
    assert_eq!(reloaded, User::new(stored.id(), "Ada", "King"));
}

#[rstest]
fn mutations_on_missing_rows_leave_other_rows_untouched() {
    let Some(ctx) = context_or_skip() else {
        return;
    };
    let seeded = insert(&ctx, "Ada", "Lovelace");
    let missing = UserId::new(999_999);

    let updated = ctx
        .block_on(
            ctx.repository
                .update(missing, &UserChanges::default().with_name("Nobody")),
        )
        .expect("update succeeds");
    let deleted = ctx
        .block_on(ctx.repository.delete(missing))
        .expect("delete succeeds");
    let remaining = ctx.block_on(ctx.repository.list()).expect("list succeeds");

    assert_eq!(updated, 0);
    assert_eq!(deleted, 0);
    assert_eq!(remaining, vec![seeded]);
}

#[rstest]
fn missing_table_surfaces_query_error() {
    let Some(ctx) = context_or_skip() else {
        return;
    };
    drop_user_table(&ctx.database_url).expect("drop user table");

    let err = ctx
        .block_on(ctx.repository.list())
        .expect_err("list fails without the table");

    assert!(
        matches!(err, UserPersistenceError::Query { .. }),
        "expected query error, got {err:?}"
    );
}

#[rstest]
fn migrations_are_idempotent() {
    let Some(ctx) = context_or_skip() else {
        return;
    };

    let applied = ctx
        .block_on(run_pending_migrations(&ctx.database_url))
        .expect("migrations succeed");

    assert_eq!(applied, 0, "template already carries every migration");
}

#[rstest]
fn http_lifecycle_round_trips_through_postgres() {
    let database = match provision_database() {
        Ok(database) => database,
        Err(reason) => {
            handle_cluster_setup_failure::<()>(reason);
            return;
        }
    };
    let url = database.url().to_owned();

    actix_rt::System::new().block_on(async move {
        let pool = DbPool::new(pool_config(&url)).await.expect("pool builds");
        let state = HttpState::from_repository(Arc::new(DieselUserRepository::new(pool)));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(Trace)
                .configure(users::routes),
        )
        .await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/user")
                .set_json(json!({"name": "Ada", "lastName": "Lovelace"}))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(created).await;
        let id = created.get("id").and_then(Value::as_i64).expect("numeric id");

        let patched = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri(&format!("/user/{id}"))
                .set_json(json!({"name": "Augusta"}))
                .to_request(),
        )
        .await;
        assert_eq!(patched.status(), StatusCode::NO_CONTENT);

        let fetched: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/user/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(
            fetched,
            json!({"id": id, "name": "Augusta", "lastName": "Lovelace"})
        );

        for request in [
            actix_test::TestRequest::patch().set_json(json!({"name": "Nobody"})),
            actix_test::TestRequest::delete(),
        ] {
            let res = actix_test::call_service(&app, request.uri("/user/999999").to_request()).await;
            assert_eq!(res.status(), StatusCode::NO_CONTENT);
        }
        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri("/user").to_request(),
        )
        .await;
        assert_eq!(listed, json!([fetched]));

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/user/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let gone = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/user/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    });

    drop(database);
}
