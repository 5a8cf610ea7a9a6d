// Baserow Rust SDK for the Baserow no-code database REST API
// Copyright 2025 the baserow-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use baserow::types::{
    ListViewsParams, RequestOptions, SortDirection, ViewCreate, ViewFilterCreate, ViewSortCreate,
    ViewUpdate,
};
use baserow_common::{CannedResponse, TestContext};

fn view_json() -> &'static str {
    r#"{
        "id": 4,
        "table_id": 1,
        "name": "Grid",
        "order": 1,
        "type": "grid",
        "slug": "xyz",
        "filter_type": "AND",
        "filters_disabled": false,
        "public": false,
        "row_identifier_type": "id"
    }"#
}

#[tokio::test]
async fn list_forwards_type_filter_and_include() {
    let ctx =
        TestContext::with_response(CannedResponse::json(&format!("[{}]", view_json()))).await;

    let params = ListViewsParams::builder()
        .view_type("grid")
        .include("filters,sortings")
        .build();
    let views = ctx.client.views().list(1, &params).await.unwrap();
    assert_eq!(views[0].view_type, "grid");
    assert_eq!(views[0].type_options["row_identifier_type"], "id");

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/database/views/table/1/");
    let pairs = req.query_pairs();
    assert!(pairs.contains(&("type".into(), "grid".into())));
    assert!(pairs.contains(&("include".into(), "filters%2Csortings".into())));
}

#[tokio::test]
async fn create_and_update_views() {
    let ctx = TestContext::with_response(CannedResponse::json(view_json())).await;

    let view = ctx
        .client
        .views()
        .create(
            1,
            &ViewCreate::builder().name("Grid").view_type("grid").build(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
    assert_eq!(view.name, "Grid");
    assert_eq!(
        ctx.server.last_request().json(),
        serde_json::json!({"name": "Grid", "type": "grid"})
    );

    ctx.client
        .views()
        .update(
            4,
            &ViewUpdate::builder().name("Main grid").build(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
    let req = ctx.server.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/api/database/views/4/");
}

#[tokio::test]
async fn duplicate_posts_without_body() {
    let ctx = TestContext::with_response(CannedResponse::json(view_json())).await;

    ctx.client
        .views()
        .duplicate(4, &RequestOptions::default())
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/database/views/4/duplicate/");
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn filters_and_sortings_have_their_own_paths() {
    let filter_json = r#"{"id": 8, "view": 4, "field": 2, "type": "equal", "value": "x"}"#;
    let sort_json = r#"{"id": 9, "view": 4, "field": 2, "order": "DESC"}"#;
    let ctx = TestContext::with_responses(vec![
        CannedResponse::json(filter_json),
        CannedResponse::json(sort_json),
    ])
    .await;

    let filter = ctx
        .client
        .views()
        .create_filter(
            4,
            &ViewFilterCreate::builder()
                .field(2)
                .condition("equal")
                .value("x")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(filter.condition, "equal");
    assert_eq!(
        ctx.server.last_request().path,
        "/api/database/views/4/filters/"
    );

    let sort = ctx
        .client
        .views()
        .create_sorting(
            4,
            &ViewSortCreate::builder()
                .field(2)
                .order(SortDirection::Desc)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(sort.order, SortDirection::Desc);
    assert_eq!(
        ctx.server.last_request().path,
        "/api/database/views/4/sortings/"
    );
}

#[tokio::test]
async fn order_posts_view_ids() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;

    ctx.client
        .views()
        .order(1, &[6, 4, 5], &RequestOptions::default())
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/database/views/table/1/order/");
    assert_eq!(req.json(), serde_json::json!({"view_ids": [6, 4, 5]}));
}
