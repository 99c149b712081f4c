mod common;

use common::{NOT_AN_IMAGE, NOT_BASE64, PNG_2X4, PNG_2X40, PNG_3X3, PNG_4X2, PNG_8X6};
use notifica_export::grid::{EvidenceGrid, pack_rows};
use notifica_export::images::scaled_height;
use notifica_export::styles::DocumentStyles;

const UNBOUNDED: f64 = f64::INFINITY;

fn photos(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

fn pixel_sizes(grid: &EvidenceGrid) -> Vec<(u32, u32)> {
    grid.rows()
        .iter()
        .flatten()
        .map(|photo| photo.pixel_size())
        .collect()
}

#[test]
fn rows_are_ceil_half_and_order_is_kept() {
    let all = [PNG_4X2, PNG_2X4, PNG_3X3, PNG_8X6, PNG_4X2];
    for n in 0..=all.len() {
        let grid = EvidenceGrid::build(&photos(&all[..n]), 70.0, UNBOUNDED);

        assert_eq!(grid.rows().len(), n.div_ceil(2), "rows for {n} photos");
        assert_eq!(grid.image_count(), n);
        for row in grid.rows() {
            assert!(!row.is_empty() && row.len() <= 2);
        }
    }

    let grid = EvidenceGrid::build(&photos(&all), 70.0, UNBOUNDED);
    assert_eq!(
        pixel_sizes(&grid),
        vec![(4, 2), (2, 4), (3, 3), (8, 6), (4, 2)]
    );
    assert_eq!(grid.rows()[2].len(), 1);
}

#[test]
fn broken_entries_are_skipped_without_placeholders() {
    let grid = EvidenceGrid::build(
        &photos(&[NOT_BASE64, PNG_2X4, NOT_AN_IMAGE, "", PNG_8X6, PNG_3X3]),
        70.0,
        UNBOUNDED,
    );

    assert_eq!(grid.image_count(), 3);
    assert_eq!(grid.rows().len(), 2);
    assert_eq!(pixel_sizes(&grid), vec![(2, 4), (8, 6), (3, 3)]);
}

#[test]
fn all_broken_entries_produce_no_element() {
    let styles = DocumentStyles::default();
    let grid = EvidenceGrid::build(&photos(&[NOT_BASE64, NOT_AN_IMAGE]), 70.0, UNBOUNDED);

    assert!(grid.is_empty());
    assert!(grid.into_element(&styles).unwrap().is_none());
}

#[test]
fn images_keep_their_aspect_ratio_at_fixed_width() {
    let grid = EvidenceGrid::build(&photos(&[PNG_4X2, PNG_2X4, PNG_8X6]), 60.0, UNBOUNDED);

    for photo in grid.rows().iter().flatten() {
        assert_eq!(photo.width, 60.0);
        let (w, h) = photo.pixel_size();
        let source = f64::from(h) / f64::from(w);
        assert!((source - photo.height / photo.width).abs() < 1e-9);
    }
}

#[test]
fn tall_images_are_capped_at_the_page_height() {
    let styles = DocumentStyles::default();
    let max_height = styles.max_image_height();
    let grid = EvidenceGrid::build(
        &photos(&[PNG_2X40, PNG_4X2]),
        styles.grid_image_width(),
        max_height,
    );

    let tall = &grid.rows()[0][0];
    assert_eq!(tall.height, max_height);
    assert!((tall.width - max_height / 20.0).abs() < 1e-9);
    assert!(max_height < styles.page.content_height());

    let wide = &grid.rows()[0][1];
    assert_eq!(wide.width, styles.grid_image_width());
    assert_eq!(wide.height, styles.grid_image_width() / 2.0);
}

#[test]
fn data_url_prefix_and_line_breaks_are_accepted() {
    let wrapped = format!(
        "data:image/png;base64,{}\n{}",
        &PNG_3X3[..20],
        &PNG_3X3[20..]
    );
    let grid = EvidenceGrid::build(&[wrapped], 50.0, UNBOUNDED);
    assert_eq!(pixel_sizes(&grid), vec![(3, 3)]);
}

#[test]
fn odd_photo_count_still_builds_a_table() {
    let styles = DocumentStyles::default();
    let grid = EvidenceGrid::build(
        &photos(&[PNG_4X2, PNG_2X4, PNG_3X3]),
        styles.grid_image_width(),
        styles.max_image_height(),
    );

    assert_eq!(grid.rows().len(), 2);
    assert!(grid.into_element(&styles).unwrap().is_some());
}

#[test]
fn grid_width_is_half_content_minus_gutter() {
    let styles = DocumentStyles::default();
    let expected = styles.page.content_width() / 2.0 - styles.grid_gutter;
    assert_eq!(styles.grid_image_width(), expected);
}

#[test]
fn zero_width_source_scales_to_zero_height() {
    assert_eq!(scaled_height(200.0, 0, 50), 0.0);
    assert_eq!(scaled_height(200.0, 100, 50), 100.0);
}

#[test]
fn pack_rows_leaves_short_final_row() {
    assert_eq!(pack_rows(vec![1, 2, 3]), vec![vec![1, 2], vec![3]]);
    assert_eq!(pack_rows(vec![1, 2, 3, 4]), vec![vec![1, 2], vec![3, 4]]);
    assert!(pack_rows(Vec::<u8>::new()).is_empty());
}
