use folio_domain::{Category, Column, ColumnLayout, ImageCatalog, Lightbox};

pub fn present_catalog_summary(catalog: &ImageCatalog) -> String {
    Category::TABS
        .into_iter()
        .map(|category| format!("{}\t{}", category, catalog.len(category)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn present_columns(layout: &ColumnLayout) -> String {
    let mut lines = Vec::with_capacity(layout.len());
    for column in Column::ORDER {
        for (index, image) in layout.positions(column) {
            lines.push(format!("{}\t{}\t{}", column_name(column), index, image));
        }
    }
    lines.join("\n")
}

pub fn present_lightbox(lightbox: &Lightbox, total: usize) -> String {
    match lightbox {
        Lightbox::Closed => "lightbox closed".to_string(),
        Lightbox::Open { image, index } => {
            format!("lightbox open {}/{} {}", index + 1, total, image)
        }
    }
}

fn column_name(column: Column) -> &'static str {
    match column {
        Column::Left => "left",
        Column::Center => "center",
        Column::Right => "right",
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::ImageId;

    use super::*;

    fn ids(count: usize) -> Vec<ImageId> {
        (0..count)
            .map(|index| ImageId::new(format!("https://img/{index}.jpeg")).expect("id"))
            .collect()
    }

    #[test]
    fn summary_lists_every_tab() {
        let catalog = ImageCatalog::new()
            .with_images(Category::Food, ids(2))
            .expect("catalog");
        let summary = present_catalog_summary(&catalog);
        assert_eq!(
            summary,
            "all\t2\nfood\t2\nproduct\t0\nnature\t0\narchitecture\t0"
        );
    }

    #[test]
    fn columns_show_flat_positions() {
        let layout = ColumnLayout::partition(&ids(4));
        assert_eq!(
            present_columns(&layout),
            "left\t0\thttps://img/0.jpeg\nleft\t3\thttps://img/3.jpeg\ncenter\t1\thttps://img/1.jpeg\nright\t2\thttps://img/2.jpeg"
        );
    }

    #[test]
    fn lightbox_uses_one_based_position() {
        let images = ids(3);
        let mut lightbox = Lightbox::Closed;
        assert_eq!(present_lightbox(&lightbox, 3), "lightbox closed");
        lightbox.open(&images[2], &images);
        assert_eq!(
            present_lightbox(&lightbox, 3),
            "lightbox open 3/3 https://img/2.jpeg"
        );
    }
}
