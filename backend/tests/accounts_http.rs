//! End-to-end behaviour of the account API over the in-memory store.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::{AccountService, TRACE_ID_HEADER};
use backend::inbound::http::configure;
use backend::inbound::http::identity::CUSTOMER_HEADER;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryAccountRepository;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn state() -> web::Data<HttpState> {
    let service = Arc::new(AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(DefaultClock),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}

async fn send<S>(app: &S, req: test::TestRequest) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    test::call_service(app, req.to_request()).await
}

fn create(cpf: &str, name: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/account")
        .set_json(json!({ "cpf": cpf, "name": name }))
}

fn as_customer(cpf: &str, req: test::TestRequest) -> test::TestRequest {
    req.insert_header((CUSTOMER_HEADER, cpf.to_owned()))
}

async fn balance_of<S>(app: &S, cpf: &str) -> f64
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = send(app, as_customer(cpf, test::TestRequest::get().uri("/balance"))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    body.get("balance")
        .and_then(Value::as_f64)
        .expect("numeric balance")
}

#[rstest]
#[actix_web::test]
async fn deposit_and_withdraw_scenario(state: web::Data<HttpState>) {
    let app = test::init_service(App::new().app_data(state).wrap(Trace).configure(configure)).await;

    assert_eq!(send(&app, create("111", "Alice")).await.status(), StatusCode::CREATED);

    let deposit = as_customer(
        "111",
        test::TestRequest::post()
            .uri("/deposit")
            .set_json(json!({ "description": "salary", "amount": 100 })),
    );
    assert_eq!(send(&app, deposit).await.status(), StatusCode::CREATED);
    assert_eq!(balance_of(&app, "111").await, 100.0);

    let overdraft = as_customer(
        "111",
        test::TestRequest::post()
            .uri("/withdraw")
            .set_json(json!({ "amount": 150 })),
    );
    let res = send(&app, overdraft).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("insufficient_funds")));
    assert_eq!(balance_of(&app, "111").await, 100.0);

    let withdraw = as_customer(
        "111",
        test::TestRequest::post()
            .uri("/withdraw")
            .set_json(json!({ "amount": 50 })),
    );
    assert_eq!(send(&app, withdraw).await.status(), StatusCode::CREATED);
    assert_eq!(balance_of(&app, "111").await, 50.0);

    let res = send(&app, as_customer("111", test::TestRequest::get().uri("/statement/"))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let statement: Value = test::read_body_json(res).await;
    let entries = statement.as_array().expect("statement array");
    let summary: Vec<_> = entries
        .iter()
        .map(|entry| {
            (
                entry.get("type").and_then(Value::as_str),
                entry.get("amount").and_then(Value::as_f64),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![(Some("credit"), Some(100.0)), (Some("debit"), Some(50.0))]
    );

    let created_at = entries[0]
        .get("createdAt")
        .and_then(Value::as_str)
        .expect("timestamp");
    let day = created_at.get(..10).expect("date prefix");
    let res = send(
        &app,
        as_customer(
            "111",
            test::TestRequest::get().uri(&format!("/statement/date?date={day}")),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let same_day: Value = test::read_body_json(res).await;
    assert_eq!(same_day.as_array().map(Vec::len), Some(2));

    let res = send(
        &app,
        as_customer(
            "111",
            test::TestRequest::get().uri("/statement/date?date=1999-01-01"),
        ),
    )
    .await;
    let other_day: Value = test::read_body_json(res).await;
    assert_eq!(other_day, json!([]));
}

#[rstest]
#[actix_web::test]
async fn duplicate_and_unknown_customers_are_rejected(state: web::Data<HttpState>) {
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    assert_eq!(send(&app, create("111", "Alice")).await.status(), StatusCode::CREATED);

    let res = send(&app, create("111", "Mallory")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("already_exists")));

    let res = send(&app, as_customer("111", test::TestRequest::get().uri("/account"))).await;
    let alice: Value = test::read_body_json(res).await;
    assert_eq!(alice.get("name"), Some(&json!("Alice")));

    let res = send(&app, as_customer("999", test::TestRequest::get().uri("/account"))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("not_found")));
}

#[rstest]
#[actix_web::test]
async fn update_and_delete_touch_only_the_acting_customer(state: web::Data<HttpState>) {
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    for (cpf, name) in [("111", "Alice"), ("222", "Bob"), ("333", "Carol")] {
        assert_eq!(send(&app, create(cpf, name)).await.status(), StatusCode::CREATED);
    }

    let rename = as_customer(
        "222",
        test::TestRequest::put()
            .uri("/account")
            .set_json(json!({ "name": "Robert" })),
    );
    assert_eq!(send(&app, rename).await.status(), StatusCode::CREATED);

    let res = send(&app, as_customer("222", test::TestRequest::get().uri("/account"))).await;
    let bob: Value = test::read_body_json(res).await;
    assert_eq!(bob.get("name"), Some(&json!("Robert")));

    let res = send(&app, as_customer("222", test::TestRequest::delete().uri("/account"))).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    for cpf in ["111", "333"] {
        let res = send(&app, as_customer(cpf, test::TestRequest::get().uri("/account"))).await;
        assert_eq!(res.status(), StatusCode::OK, "{cpf} should survive");
    }
    let res = send(&app, as_customer("222", test::TestRequest::get().uri("/account"))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn overflowing_deposit_is_rejected_and_store_keeps_serving(state: web::Data<HttpState>) {
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    assert_eq!(send(&app, create("1", "Alice")).await.status(), StatusCode::CREATED);

    let deposit = || {
        as_customer(
            "1",
            test::TestRequest::post()
                .uri("/deposit")
                .set_json(json!({ "amount": 7.0e28 })),
        )
    };
    assert_eq!(send(&app, deposit()).await.status(), StatusCode::CREATED);

    let res = send(&app, deposit()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));

    let withdraw = as_customer(
        "1",
        test::TestRequest::post()
            .uri("/withdraw")
            .set_json(json!({ "amount": 1 })),
    );
    assert_eq!(send(&app, withdraw).await.status(), StatusCode::CREATED);
    let res = send(&app, as_customer("1", test::TestRequest::get().uri("/account"))).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(send(&app, create("2", "Bob")).await.status(), StatusCode::CREATED);
}
