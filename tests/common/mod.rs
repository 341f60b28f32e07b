#![allow(dead_code)]

use std::str::FromStr;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tower::ServiceExt;

/// A pool pointed at a port nothing listens on. Every acquire fails fast.
pub fn unreachable_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("mysql://root@127.0.0.1:1/compliance")
        .expect("static URL parses")
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// A throwaway database seeded with a small compliance data set.
///
/// Areas: East (no stores), North (store 10), South (store 20).
/// Brands: Acme (product 100), Zenith (product 200).
pub struct TestDb {
    admin: MySqlPool,
    pub pool: MySqlPool,
    name: String,
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE store_area (area_id INT PRIMARY KEY, area_name VARCHAR(100) NOT NULL)",
    "CREATE TABLE product_brand (brand_id INT PRIMARY KEY, brand_name VARCHAR(100) NOT NULL)",
    "CREATE TABLE store (store_id INT PRIMARY KEY, area_id INT NOT NULL)",
    "CREATE TABLE product (product_id INT PRIMARY KEY, brand_id INT NOT NULL)",
    "CREATE TABLE report_product (
        report_id INT AUTO_INCREMENT PRIMARY KEY,
        store_id INT NOT NULL,
        product_id INT NOT NULL,
        tanggal DATE NOT NULL,
        compliance BOOLEAN NOT NULL
    )",
    "INSERT INTO store_area (area_id, area_name) VALUES (1, 'North'), (2, 'South'), (3, 'East')",
    "INSERT INTO product_brand (brand_id, brand_name) VALUES (2, 'Zenith'), (1, 'Acme')",
    "INSERT INTO store (store_id, area_id) VALUES (10, 1), (20, 2)",
    "INSERT INTO product (product_id, brand_id) VALUES (100, 1), (200, 2)",
    "INSERT INTO report_product (store_id, product_id, tanggal, compliance) VALUES
        (10, 100, '2024-01-05', TRUE),
        (10, 100, '2024-01-20', FALSE),
        (10, 200, '2024-02-10', TRUE),
        (20, 100, '2024-01-15', TRUE),
        (20, 200, '2024-02-01', FALSE),
        (20, 200, '2024-02-15', FALSE)",
];

impl TestDb {
    pub async fn create() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let options = MySqlConnectOptions::from_str(&url).ok()?;

        let admin = MySqlPoolOptions::new()
            .max_connections(2)
            .connect_with(options.clone())
            .await
            .ok()?;

        let name = format!("compliance_test_{}", fastrand::u64(..));
        sqlx::query(&format!("CREATE DATABASE `{name}`"))
            .execute(&admin)
            .await
            .ok()?;

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_with(options.database(&name))
            .await
            .ok()?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await.ok()?;
        }

        Some(Self { admin, pool, name })
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        let _ = sqlx::query(&format!("DROP DATABASE `{}`", self.name))
            .execute(&self.admin)
            .await;
    }
}
