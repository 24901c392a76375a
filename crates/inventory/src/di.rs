use crate::{
    abstract_trait::{
        product::service::{DynProductCommandService, DynProductQueryService},
        product_sale::service::{DynProductSaleCommandService, DynProductSaleQueryService},
        product_supply::service::{DynProductSupplyCommandService, DynProductSupplyQueryService},
    },
    repository::Repositories,
    service::{
        product::{ProductCommandService, ProductQueryService},
        product_sale::{ProductSaleCommandService, ProductSaleQueryService},
        product_supply::{ProductSupplyCommandService, ProductSupplyQueryService},
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub product_sale_query: DynProductSaleQueryService,
    pub product_sale_command: DynProductSaleCommandService,
    pub product_supply_query: DynProductSupplyQueryService,
    pub product_supply_command: DynProductSupplyCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("product_sale_query", &"DynProductSaleQueryService")
            .field("product_sale_command", &"DynProductSaleCommandService")
            .field("product_supply_query", &"DynProductSupplyQueryService")
            .field("product_supply_command", &"DynProductSupplyCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repos: Repositories, registry: &mut Registry) -> Self {
        let product_query = Arc::new(ProductQueryService::new(
            repos.product_query.clone(),
            registry,
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(
            repos.product_query.clone(),
            repos.product_command,
            registry,
        )) as DynProductCommandService;

        let product_sale_query = Arc::new(ProductSaleQueryService::new(
            repos.sale_query.clone(),
            registry,
        )) as DynProductSaleQueryService;

        let product_sale_command = Arc::new(ProductSaleCommandService::new(
            repos.product_query.clone(),
            repos.sale_query,
            repos.sale_command,
            registry,
        )) as DynProductSaleCommandService;

        let product_supply_query = Arc::new(ProductSupplyQueryService::new(
            repos.supply_query.clone(),
            registry,
        )) as DynProductSupplyQueryService;

        let product_supply_command = Arc::new(ProductSupplyCommandService::new(
            repos.product_query,
            repos.supply_query,
            repos.supply_command,
            registry,
        )) as DynProductSupplyCommandService;

        Self {
            product_query,
            product_command,
            product_sale_query,
            product_sale_command,
            product_supply_query,
            product_supply_command,
        }
    }
}
