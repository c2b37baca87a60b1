//! 路径解析测试

use ora_grading::app_path::{location_id, route_path, specific_submission_id};

const BASE: &str = "/base/";
const UUID: &str = "0b9407b5-8ce3-41cf-9c4e-64216a6119d9";

#[test]
fn test_location_id_first_segment() {
    assert_eq!(
        location_id("/base/LOC123/whatever", BASE),
        Some("LOC123".to_string())
    );
    assert_eq!(location_id("/base/LOC123", BASE), Some("LOC123".to_string()));
}

#[test]
fn test_location_id_empty_path() {
    assert_eq!(location_id("/base/", BASE), None);
}

#[test]
fn test_submission_id_valid_uuid() {
    let path = format!("/base/LOC123/{}", UUID);
    assert_eq!(
        specific_submission_id(&path, BASE),
        Some(UUID.to_string())
    );
}

#[test]
fn test_submission_id_uppercase_uuid_accepted() {
    let path = format!("/base/LOC123/{}", UUID.to_uppercase());
    assert_eq!(
        specific_submission_id(&path, BASE),
        Some(UUID.to_uppercase())
    );
}

#[test]
fn test_submission_id_trailing_slash_absent() {
    assert_eq!(specific_submission_id("/base/LOC123/", BASE), None);
}

#[test]
fn test_submission_id_missing_segment_absent() {
    assert_eq!(specific_submission_id("/base/LOC123", BASE), None);
}

#[test]
fn test_submission_id_malformed_absent() {
    // 格式非法一律按"不存在"处理，不报错
    assert_eq!(specific_submission_id("/base/LOC123/not-a-uuid", BASE), None);
    assert_eq!(
        specific_submission_id("/base/LOC123/0b9407b5-8ce3-41cf-9c4e", BASE),
        None
    );
    // 多一个字符也不行：必须完整匹配
    let path = format!("/base/LOC123/{}f", UUID);
    assert_eq!(specific_submission_id(&path, BASE), None);
}

#[test]
fn test_route_path_template() {
    assert_eq!(route_path(BASE), "/base/:locationId");
}
