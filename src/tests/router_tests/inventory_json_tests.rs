use crate::tests::utils::{get, sample_site, PLACEHOLDER};
use serde_json::Value;

#[test]
fn serves_inventory_records() {
    let (status, body) = get(&sample_site(), "/inventory.json");

    assert_eq!(status, 200);

    let json: Value = serde_json::from_str(&body).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["nid"], "BF-101");
    assert_eq!(items[1]["images"][0], PLACEHOLDER);
}
