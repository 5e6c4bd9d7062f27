#![cfg(target_arch = "wasm32")]

use mushaf_index::MushafMapper;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_to_global() {
    let mapper = MushafMapper::new();
    assert_eq!(mapper.to_global(3, 1).unwrap(), 294);
    assert!(mapper.to_global(115, 1).is_err());
}

#[wasm_bindgen_test]
fn test_point_round_trip() {
    let mapper = MushafMapper::new();
    let point = mapper.parse_point("2:255").unwrap();
    assert_eq!(mapper.serialize_point(point).unwrap(), "2:255");

    let empty = mapper.parse_point("garbage").unwrap();
    assert_eq!(mapper.serialize_point(empty).unwrap(), "");
}

#[wasm_bindgen_test]
fn test_no_overlap_is_null() {
    let mapper = MushafMapper::new();
    assert_eq!(mapper.chapter_range_in_hizb(3, 1).unwrap(), JsValue::NULL);
    assert!(!mapper.chapter_range_in_hizb(2, 1).unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_resolve_point() {
    let mapper = MushafMapper::new();
    assert!(mapper.resolve_point("").unwrap().is_null());
    assert!(mapper.resolve_point("hizb:61").is_err());
}

#[wasm_bindgen_test]
fn test_serialize_point_from_js_object() {
    let mapper = MushafMapper::new();

    let verse = js_sys::Object::new();
    js_sys::Reflect::set(&verse, &"chapterId".into(), &JsValue::from(2)).unwrap();
    js_sys::Reflect::set(&verse, &"verseInChapter".into(), &JsValue::from(255)).unwrap();
    assert_eq!(mapper.serialize_point(verse.into()).unwrap(), "2:255");

    let hizb = js_sys::Object::new();
    js_sys::Reflect::set(&hizb, &"hizb".into(), &JsValue::from(12)).unwrap();
    assert_eq!(mapper.serialize_point(hizb.into()).unwrap(), "hizb:12");

    let misspelled = js_sys::Object::new();
    js_sys::Reflect::set(&misspelled, &"chapter".into(), &JsValue::from(2)).unwrap();
    assert!(mapper.serialize_point(misspelled.into()).is_err());
}
