//! Shared helpers for the integration suites

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use meeple_server::{build_router, ServerConfig};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

const SCHEMA: &str = include_str!("../../db/schema.sql");

/// Router over a pool that never connects.
///
/// Good for any request rejected before the handler reaches the database.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://meeple@localhost/unreachable")
        .expect("lazy pool");
    build_router(pool, &ServerConfig::default())
}

/// Router over a freshly seeded database from `DATABASE_URL`.
pub async fn seeded_app() -> Router {
    let pool = seeded_pool().await;
    build_router(pool, &ServerConfig::default())
}

pub async fn seeded_pool() -> PgPool {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("database connection");

    sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("schema");
    seed(&pool).await;
    pool
}

fn ts(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).expect("valid timestamp")
}

/// Four categories, four users, thirteen reviews (eleven "social deduction",
/// review 1 without comments) and six comments.
async fn seed(pool: &PgPool) {
    let categories = [
        ("euro game", "Abstact games that involve little luck"),
        ("social deduction", "Players attempt to uncover each other's hidden role"),
        ("dexterity", "Games involving physical skill"),
        ("children's games", "Games suitable for children"),
    ];
    for (slug, description) in categories {
        sqlx::query("INSERT INTO categories (slug, description) VALUES ($1, $2)")
            .bind(slug)
            .bind(description)
            .execute(pool)
            .await
            .expect("seed category");
    }

    let users = [
        ("mallionaire", "haz", "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"),
        ("philippaclaire9", "philippa", "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4"),
        ("bainesface", "sarah", "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4"),
        ("dav3rid", "dave", "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png"),
    ];
    for (username, name, avatar_url) in users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(name)
            .bind(avatar_url)
            .execute(pool)
            .await
            .expect("seed user");
    }

    let img = "https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg?w=700&h=700";
    // (title, designer, owner, body, category, created_at millis, votes)
    let reviews = [
        ("Agricola", "Uwe Rosenberg", "mallionaire", "Farmyard fun!", "euro game", 1610964020514, 1),
        ("Jenga", "Leslie Scott", "philippaclaire9", "Fiddly fun for all the family", "dexterity", 1610964101251, 5),
        ("Ultimate Werewolf", "Akihisa Okui", "bainesface", "We couldn't find the werewolf!", "social deduction", 1610964101251, 5),
        ("Dolor reprehenderit", "Gamey McGameface", "mallionaire", "Consequat velit occaecat voluptate do.", "social deduction", 1611315350936, 7),
        ("Proident tempor et.", "Seymour Buttz", "mallionaire", "Labore occaecat sunt qui commodo.", "social deduction", 1610010368077, 5),
        ("Occaecat consequat officia in quis commodo.", "Ollie Tabooger", "mallionaire", "Fugiat fugiat enim officia laborum.", "social deduction", 1600010368077, 8),
        ("Mollit elit qui incididunt veniam occaecat cupidatat", "Avery Wunzboogerz", "mallionaire", "Consectetur incididunt aliquip sunt.", "social deduction", 1611315350936, 9),
        ("One Night Ultimate Werewolf", "Akihisa Okui", "mallionaire", "We couldn't find the werewolf!", "social deduction", 1611315350936, 5),
        ("A truly Quacking Game; Quacks of Quedlinburg", "Wolfgang Warsch", "mallionaire", "Ever wish you could play a game with a little chemistry?", "social deduction", 1611315350936, 10),
        ("Build you own tour de Yorkshire", "Asger Harding Granerud", "mallionaire", "Cold rain pours on the faces of your team of cyclists.", "social deduction", 1611315350936, 10),
        ("That's just what an evil person would say!", "Fiona Lohoar", "mallionaire", "If you've ever wanted to accuse your siblings of being sneaky.", "social deduction", 1611315350936, 8),
        ("Scythe; you're gonna need a bigger table!", "Jamey Stegmaier", "mallionaire", "Spend 30 minutes just setting up all of the boards.", "social deduction", 1611315350936, 100),
        ("Settlers of Catan: Don't Settle For Less", "Klaus Teuber", "mallionaire", "You have stumbled across an uncharted island.", "social deduction", 788918400, 16),
    ];
    for (title, designer, owner, body, category, created_at, votes) in reviews {
        sqlx::query(
            "INSERT INTO reviews (title, designer, owner, review_img_url, review_body, category, created_at, votes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(title)
        .bind(designer)
        .bind(owner)
        .bind(img)
        .bind(body)
        .bind(category)
        .bind(ts(created_at))
        .bind(votes)
        .execute(pool)
        .await
        .expect("seed review");
    }

    // (body, votes, author, review_id, created_at millis)
    let comments = [
        ("I loved this game too!", 16, "bainesface", 2, 1511354613389),
        ("My dog loved this game too!", 13, "mallionaire", 3, 1610964545410),
        ("I didn't know dogs could play games", 10, "philippaclaire9", 3, 1610964588110),
        ("EPIC board game!", 16, "bainesface", 2, 1511354163389),
        ("Now this is a story all about how, board games turned my life upside down", 13, "mallionaire", 2, 1610965445410),
        ("Not sure about dogs, but my cat likes to get involved with board games", 10, "philippaclaire9", 3, 1616874588110),
    ];
    for (body, votes, author, review_id, created_at) in comments {
        sqlx::query(
            "INSERT INTO comments (body, votes, author, review_id, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(body)
        .bind(votes)
        .bind(author)
        .bind(review_id)
        .bind(ts(created_at))
        .execute(pool)
        .await
        .expect("seed comment");
    }
}

/// Send one request and decode the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
