use super::*;

#[test]
fn tile_sources_has_one_entry_per_pin_in_order() {
    let pins: Vec<Pin> = (0..12).map(|i| Pin::with_regular(format!("https://img.test/{i}.jpg"))).collect();

    let sources = tile_sources(&pins);

    assert_eq!(sources.len(), 12);
    for (pin, src) in pins.iter().zip(&sources) {
        assert_eq!(src.as_deref(), pin.urls.as_ref().and_then(|u| u.regular.as_deref()));
    }
}

#[test]
fn pin_without_urls_yields_empty_source() {
    let pins = vec![Pin::default(), Pin::with_regular("https://img.test/ok.jpg")];

    let sources = tile_sources(&pins);

    assert_eq!(sources, vec![None, Some("https://img.test/ok.jpg".to_owned())]);
}

#[test]
fn empty_board_has_no_tiles() {
    assert!(tile_sources(&[]).is_empty());
}
