#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};

pub const MASTER_REF: &str = "ZmFzdGVyLXJlZg";

pub fn api_root_body() -> Value {
    json!({
        "refs": [
            {"id": "master", "ref": MASTER_REF, "label": "Master", "isMasterRef": true},
            {"id": "release-1", "ref": "release-ref", "label": "Summer", "isMasterRef": false}
        ],
        "types": {"article": "Article", "category": "Category"}
    })
}

pub fn search_body(page: u32, total_pages: u32, results: Vec<Value>) -> Value {
    let size = results.len();
    json!({
        "page": page,
        "results_per_page": 100,
        "results_size": size,
        "total_results_size": size,
        "total_pages": total_pages,
        "next_page": null,
        "prev_page": null,
        "results": results
    })
}

pub fn predicate(document_type: &str) -> String {
    format!("[[at(document.type, \"{}\")]]", document_type)
}

pub fn mock_api_root(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/api/v2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(api_root_body());
    })
}

pub fn mock_type<'a>(server: &'a MockServer, document_type: &str, results: Vec<Value>) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/documents/search")
            .query_param("ref", MASTER_REF)
            .query_param("q", predicate(document_type).as_str());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(search_body(1, 1, results));
    })
}

pub fn category(id: &str, name: &str) -> Value {
    json!({
        "id": id, "uid": null, "type": "category",
        "first_publication_date": "2022-01-01T10:00:00+0000",
        "data": {"name": name}
    })
}

pub fn assortiment(id: &str, category_id: &str, name: &str) -> Value {
    json!({
        "id": id, "uid": null, "type": "assortiment",
        "first_publication_date": "2022-01-02T10:00:00+0000",
        "data": {
            "name": name,
            "category": {"id": category_id, "type": "category", "link_type": "Document", "isBroken": false}
        }
    })
}

pub fn product(id: &str, assortiment_id: &str, name: &str) -> Value {
    json!({
        "id": id, "uid": null, "type": "product",
        "first_publication_date": "2022-01-03T10:00:00+0000",
        "data": {
            "name": name,
            "assortiment": {"id": assortiment_id, "type": "assortiment", "link_type": "Document", "isBroken": false}
        }
    })
}

pub fn article(id: &str, uid: &str, title: &str, body: &str) -> Value {
    json!({
        "id": id, "uid": uid, "type": "article",
        "first_publication_date": "2023-06-01T08:00:00+0000",
        "data": {
            "title": [{"type": "heading1", "text": title, "spans": []}],
            "publishDate": "2024-01-05",
            "featuredImage": {},
            "slices": [
                {"slice_type": "text", "slice_label": null, "items": [{}],
                 "primary": {"text": [{"type": "paragraph", "text": body, "spans": []}]}}
            ]
        }
    })
}

pub fn navigation() -> Value {
    json!({
        "id": "nav", "uid": null, "type": "navigation",
        "data": {
            "links": [
                {"label": [{"type": "paragraph", "text": "About us", "spans": []}],
                 "link": {"id": "pg1", "type": "page", "uid": "about", "link_type": "Document", "isBroken": false}}
            ]
        }
    })
}

pub fn settings(name: &str) -> Value {
    json!({
        "id": "set", "uid": null, "type": "settings",
        "data": {
            "name": [{"type": "heading1", "text": name, "spans": []}],
            "description": [{"type": "paragraph", "text": "Fresh every day", "spans": []}]
        }
    })
}
