//! d405 Assets: реестр основных средств

mod fixtures;

use contracts::domain::a005_asset::Asset;
use uuid::Uuid;

use crate::shared::list::{FilterSpec, IdGenerator, UuidIds};
use crate::shared::schema::DashboardSchema;

pub use fixtures::sample_assets;

pub struct AssetsDashboard;

impl DashboardSchema for AssetsDashboard {
    type Record = Asset;

    fn key() -> &'static str {
        "d405_assets"
    }

    fn title() -> &'static str {
        "Asset register"
    }

    fn filter_spec() -> FilterSpec {
        FilterSpec {
            search_fields: &["asset_tag", "name", "location"],
            category_field: Some("category"),
            date_field: Some("purchase_date"),
        }
    }

    fn id_generator() -> Option<Box<dyn IdGenerator<Uuid>>> {
        Some(Box::new(UuidIds))
    }

    fn sample_data() -> Vec<Asset> {
        sample_assets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use crate::shared::format::{format_date, format_rupiah};
    use crate::shared::view_model::DashboardViewModel;
    use std::collections::HashSet;

    fn view_model() -> DashboardViewModel<AssetsDashboard> {
        DashboardViewModel::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_every_asset_gets_a_unique_uuid() {
        let vm = view_model();
        let ids: HashSet<Uuid> = vm.records().iter().filter_map(|a| a.id).collect();
        assert_eq!(ids.len(), vm.records().len());
    }

    #[test]
    fn test_vehicles_bought_since_2022() {
        let mut vm = view_model();
        vm.set_category(Some("Vehicle"));
        vm.set_date_range(Some("2022-01-01"), None);
        let tags: Vec<String> = vm.filtered().unwrap().into_iter().map(|a| a.asset_tag).collect();
        assert_eq!(tags, vec!["VEH-0007"]);
    }

    #[test]
    fn test_asset_tag_is_normalized_on_input() {
        let mut vm = view_model();
        vm.open_add();
        for (field, value) in [
            ("asset_tag", " lpt-0014 "),
            ("name", "ThinkPad X1 Carbon"),
            ("category", "It"),
            ("location", "Jakarta HQ"),
            ("purchase_date", "2024-06-03"),
            ("purchase_value", "27900000"),
        ] {
            vm.set_field(field, value).unwrap();
        }
        let saved = vm.submit().unwrap();
        assert_eq!(saved.asset_tag, "LPT-0014");
        assert!(saved.id.is_some());
        assert_eq!(vm.records().len(), 10);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut vm = view_model();
        let id = vm.records()[6].id.unwrap();
        vm.request_delete(&id).unwrap();
        assert_eq!(
            vm.delete_dialog().prompt().as_deref(),
            Some("Delete asset \"FRN-0087 Reception sofa\"?")
        );
        assert_eq!(vm.records().len(), 9);
        vm.confirm_delete().unwrap();
        assert!(vm.get(&id).is_none());
        assert_eq!(vm.confirm_delete().unwrap(), None);
    }

    #[test]
    fn test_display_formatting() {
        let vm = view_model();
        let lathe = &vm.records()[7];
        assert_eq!(format_rupiah(lathe.purchase_value), "Rp 1.350.000.000");
        assert_eq!(format_date(&lathe.purchase_date), "30/09/2019");
    }
}
