mod command;
mod query;

pub use self::command::ProductSaleCommandRepository;
pub use self::query::ProductSaleQueryRepository;

/// Sale columns are aliased so the joined product keeps its own column names.
pub(super) const SELECT_SALE: &str = r#"
    SELECT s.id AS sale_id,
           s.document_name,
           s.quantity,
           s.purchase_price,
           s.created_at AS sale_created_at,
           s.updated_at AS sale_updated_at,
           p.id,
           p.name,
           p.description,
           p.price,
           p.in_stock,
           p.created_at,
           p.updated_at
    FROM product_sales s
    JOIN products p ON p.id = s.product_id
"#;
