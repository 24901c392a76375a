mod command;
mod query;

pub use self::command::ProductSupplyCommandRepository;
pub use self::query::ProductSupplyQueryRepository;

/// Supply columns are aliased so the joined product keeps its own column names.
pub(super) const SELECT_SUPPLY: &str = r#"
    SELECT s.id AS supply_id,
           s.document_name,
           s.quantity,
           s.created_at AS supply_created_at,
           s.updated_at AS supply_updated_at,
           p.id,
           p.name,
           p.description,
           p.price,
           p.in_stock,
           p.created_at,
           p.updated_at
    FROM product_supplies s
    JOIN products p ON p.id = s.product_id
"#;
