//! Универсальная view model табличного дашборда
//!
//! Хранилище -> фильтры -> пагинация -> строки таблицы. Форма и диалог
//! удаления пишут обратно в хранилище; удаление возможно только через
//! `request_delete` + `confirm_delete`.

use contracts::domain::common::Record;

use super::config::Config;
use super::error::{DashboardError, DashboardResult};
use super::export::{run_export, ExportArtifact, ExportError, ExportFormat, ExportScope, Exporter, UnavailableExporter};
use super::list::{apply_filter, paginate, FilterState, Page, RecordStore};
use super::modal::{DeleteConfirmation, FormEditor};
use super::notice::{Notice, NoticeBoard};
use super::schema::DashboardSchema;
use super::state::FilterStateStore;

type RecordOf<D> = <D as DashboardSchema>::Record;
type IdOf<D> = <RecordOf<D> as Record>::Id;

pub struct DashboardViewModel<D: DashboardSchema> {
    store: RecordStore<RecordOf<D>>,
    filter: FilterState,
    page: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    editor: FormEditor<RecordOf<D>>,
    delete: DeleteConfirmation<RecordOf<D>>,
    exporter: Box<dyn Exporter<RecordOf<D>>>,
    notices: NoticeBoard,
}

impl<D: DashboardSchema> std::fmt::Debug for DashboardViewModel<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardViewModel")
            .field("dashboard", &D::key())
            .field("store", &self.store)
            .field("filter", &self.filter)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl<D: DashboardSchema> DashboardViewModel<D> {
    /// View model с демонстрационными данными дашборда
    pub fn new(config: &Config) -> DashboardResult<Self> {
        Self::with_seed(D::sample_data(), config)
    }

    /// View model с переданными начальными данными
    pub fn with_seed(seed: Vec<RecordOf<D>>, config: &Config) -> DashboardResult<Self> {
        let store = RecordStore::new(seed, D::id_generator(), config.store.insert_position)?;
        tracing::info!("{}: dashboard ready with {} records", D::key(), store.len());
        Ok(Self {
            store,
            filter: FilterState::default(),
            page: 1,
            page_size: config.page_size(),
            page_size_options: config.pagination.page_size_options.clone(),
            editor: FormEditor::new(),
            delete: DeleteConfirmation::new(),
            exporter: Box::new(UnavailableExporter),
            notices: NoticeBoard::new(),
        })
    }

    /// Подключить сериализатор для экспорта
    pub fn with_exporter<E>(mut self, exporter: E) -> Self
    where
        E: Exporter<RecordOf<D>> + 'static,
    {
        self.exporter = Box::new(exporter);
        self
    }

    pub fn key(&self) -> &'static str {
        D::key()
    }

    pub fn title(&self) -> &'static str {
        D::title()
    }

    // ========================================================================
    // Чтение
    // ========================================================================

    /// Полный список без фильтров
    pub fn records(&self) -> &[RecordOf<D>] {
        self.store.list()
    }

    pub fn get(&self, id: &IdOf<D>) -> Option<&RecordOf<D>> {
        self.store.get(id)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Отфильтрованная копия списка
    pub fn filtered(&self) -> DashboardResult<Vec<RecordOf<D>>> {
        apply_filter(self.store.list(), &D::filter_spec(), &self.filter)
    }

    /// Текущая страница отфильтрованного списка
    pub fn visible_page(&self) -> DashboardResult<Page<RecordOf<D>>> {
        let filtered = self.filtered()?;
        Ok(paginate(&filtered, self.page_size, self.page))
    }

    // ========================================================================
    // Фильтры и пагинация (любое изменение фильтра -> страница 1)
    // ========================================================================

    pub fn set_search(&mut self, text: &str) {
        self.filter.search = text.to_string();
        self.reset_page();
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.filter.category = category.map(str::to_string);
        self.reset_page();
    }

    pub fn set_date_range(&mut self, from: Option<&str>, to: Option<&str>) {
        self.filter.date_from = from.map(str::to_string);
        self.filter.date_to = to.map(str::to_string);
        self.reset_page();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(FilterState::default());
    }

    /// Перейти на страницу; номер ограничивается числом страниц
    pub fn set_page(&mut self, page: usize) {
        self.page = match self.visible_total_pages() {
            Some(total) => page.clamp(1, total),
            None => page.max(1),
        };
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }

    fn visible_total_pages(&self) -> Option<usize> {
        self.visible_page().ok().map(|p| p.total_pages)
    }

    // ========================================================================
    // Форма добавления/редактирования
    // ========================================================================

    pub fn editor(&self) -> &FormEditor<RecordOf<D>> {
        &self.editor
    }

    pub fn open_add(&mut self) {
        self.editor.open_add();
    }

    /// Открыть запись для редактирования; отсутствующая запись -> уведомление
    pub fn open_edit(&mut self, id: &IdOf<D>) -> DashboardResult<()> {
        let result = self.editor.open_edit(&self.store, id);
        self.notify_not_found(result)
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> DashboardResult<()> {
        self.editor.set_field(field, value)
    }

    /// Сохранить форму
    ///
    /// Ошибки валидации и дубликаты ID остаются в форме, `NotFound`
    /// дополнительно показывается уведомлением.
    pub fn submit(&mut self) -> DashboardResult<RecordOf<D>> {
        let result = self.editor.submit(&mut self.store);
        let saved = self.notify_not_found(result)?;
        self.notices
            .info(format!("{} \"{}\" saved", <RecordOf<D> as Record>::element_name(), saved.title()));
        Ok(saved)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    // ========================================================================
    // Удаление с подтверждением
    // ========================================================================

    pub fn delete_dialog(&self) -> &DeleteConfirmation<RecordOf<D>> {
        &self.delete
    }

    pub fn request_delete(&mut self, id: &IdOf<D>) -> DashboardResult<()> {
        let result = self.delete.request(&self.store, id);
        self.notify_not_found(result)
    }

    pub fn confirm_delete(&mut self) -> DashboardResult<Option<RecordOf<D>>> {
        let result = self.delete.confirm(&mut self.store);
        let removed = self.notify_not_found(result)?;
        if let Some(record) = &removed {
            tracing::info!("{}: deleted \"{}\"", D::key(), record.title());
            // страница могла опустеть
            self.set_page(self.page);
        }
        Ok(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    // ========================================================================
    // Экспорт
    // ========================================================================

    /// Передать записи сериализатору; ошибка показывается уведомлением
    pub fn export(&mut self, format: ExportFormat, scope: ExportScope) -> DashboardResult<ExportArtifact> {
        let records = match scope {
            ExportScope::CurrentPage => self.visible_page()?.items,
            ExportScope::Filtered => self.filtered()?,
            ExportScope::All => self.store.list().to_vec(),
        };

        match run_export(self.exporter.as_ref(), &records, format) {
            Ok(artifact) => {
                self.notices.info(format!("Exported {}", artifact.file_name));
                Ok(artifact)
            }
            Err(e) => {
                match &e {
                    ExportError::Empty => self.notices.warning(e.to_string()),
                    _ => self.notices.error(e.to_string()),
                };
                Err(DashboardError::from(e))
            }
        }
    }

    // ========================================================================
    // Уведомления и состояние фильтров
    // ========================================================================

    pub fn notices(&self) -> &[Notice] {
        self.notices.list()
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    /// Сохранить фильтр перед уходом с дашборда
    pub fn save_filter(&self, states: &mut FilterStateStore) {
        states.save(D::key(), &self.filter);
    }

    /// Вернуть сохранённый фильтр; страница сбрасывается на 1
    pub fn restore_filter(&mut self, states: &FilterStateStore) {
        if let Some(filter) = states.load(D::key()) {
            self.set_filter(filter);
        }
    }

    fn notify_not_found<T>(&mut self, result: DashboardResult<T>) -> DashboardResult<T> {
        if let Err(e @ DashboardError::NotFound { .. }) = &result {
            self.notices.warning(e.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_travel_requests::TravelRequestsDashboard;
    use crate::shared::notice::NoticeLevel;
    use contracts::domain::a004_travel_request::TravelRequest;

    type ViewModel = DashboardViewModel<TravelRequestsDashboard>;

    /// 12 заявок, из них 3 в Jakarta
    fn twelve_requests() -> Vec<TravelRequest> {
        let destinations = [
            "Jakarta", "Surabaya", "Medan", "Bandung", "Jakarta", "Makassar",
            "Denpasar", "Semarang", "Jakarta", "Palembang", "Balikpapan", "Manado",
        ];
        destinations
            .iter()
            .enumerate()
            .map(|(i, destination)| {
                let day = i + 1;
                TravelRequest::new(
                    &format!("Employee {}", day),
                    "Operations",
                    destination,
                    "Site visit",
                    &format!("2024-05-{:02}", day),
                    &format!("2024-05-{:02}", day + 2),
                    1_000_000.0 * day as f64,
                )
            })
            .collect()
    }

    fn view_model() -> ViewModel {
        ViewModel::with_seed(twelve_requests(), &Config::default()).unwrap()
    }

    struct CountingExporter;

    impl Exporter<TravelRequest> for CountingExporter {
        fn export(&self, records: &[TravelRequest], format: ExportFormat) -> Result<ExportArtifact, ExportError> {
            Ok(ExportArtifact {
                file_name: format!("travel_request.{}", format.extension()),
                mime_type: format.mime_type().to_string(),
                bytes: records.len().to_string().into_bytes(),
            })
        }
    }

    #[test]
    fn test_twelve_thirteen_twelve_scenario() {
        let mut vm = view_model();

        let first = vm.visible_page().unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);
        vm.set_page(2);
        assert_eq!(vm.visible_page().unwrap().items.len(), 2);

        vm.set_search("jakarta");
        assert_eq!(vm.page(), 1);
        let page = vm.visible_page().unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 3);

        vm.open_add();
        for (field, value) in [
            ("employee", "Dewi Lestari"),
            ("department", "Sales"),
            ("destination", "Jakarta Selatan"),
            ("purpose", "Key account meeting"),
            ("departure_date", "2024-06-10"),
            ("return_date", "2024-06-11"),
            ("estimated_cost", "2500000"),
        ] {
            vm.set_field(field, value).unwrap();
        }
        let saved = vm.submit().unwrap();
        assert_eq!(vm.records().len(), 13);
        let page = vm.visible_page().unwrap();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.total_pages, 1);

        let id = saved.id.clone().unwrap();
        vm.request_delete(&id).unwrap();
        vm.cancel_delete();
        assert_eq!(vm.records().len(), 13);

        vm.request_delete(&id).unwrap();
        let removed = vm.confirm_delete().unwrap().unwrap();
        assert_eq!(removed.id, Some(id.clone()));
        assert_eq!(vm.records().len(), 12);
        assert!(vm.records().iter().all(|r| r.id.as_ref() != Some(&id)));
        assert!(vm.get(&id).is_none());
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let mut vm = view_model();
        let changes: [fn(&mut ViewModel); 5] = [
            |vm| vm.set_search("a"),
            |vm| vm.set_category(Some("Pending")),
            |vm| vm.set_date_range(Some("2024-05-01"), None),
            |vm| vm.clear_filters(),
            |vm| vm.set_page_size(5),
        ];
        for change in changes {
            vm.set_filter(FilterState::default());
            vm.set_page(2);
            assert_eq!(vm.page(), 2);
            change(&mut vm);
            assert_eq!(vm.page(), 1);
        }
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut vm = view_model();
        vm.set_page(99);
        assert_eq!(vm.page(), 2);
        vm.set_page(0);
        assert_eq!(vm.page(), 1);
    }

    #[test]
    fn test_show_all_page_size() {
        let mut vm = view_model();
        vm.set_page_size(usize::MAX);
        vm.set_page(2);
        let page = vm.visible_page().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn test_malformed_date_bound_is_validation_error() {
        let mut vm = view_model();
        vm.set_date_range(Some("31/05/2024"), None);
        let err = vm.visible_page().unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("date_from"));
    }

    #[test]
    fn test_open_edit_of_missing_record_adds_notice() {
        let mut vm = view_model();
        let missing = "TRV-999999".to_string();
        assert!(matches!(vm.open_edit(&missing), Err(DashboardError::NotFound { .. })));
        assert!(!vm.editor().is_open());
        assert_eq!(vm.notices().len(), 1);
        assert_eq!(vm.notices()[0].level, NoticeLevel::Warning);

        let id = vm.notices()[0].id;
        vm.dismiss_notice(id);
        assert!(vm.notices().is_empty());
    }

    #[test]
    fn test_validation_errors_stay_inline() {
        let mut vm = view_model();
        vm.open_add();
        let err = vm.submit().unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
        assert!(vm.editor().is_open());
        assert!(vm.editor().field_error("employee").is_some());
        assert!(vm.notices().is_empty());
    }

    #[test]
    fn test_export_stub_produces_notice() {
        let mut vm = view_model();
        let err = vm.export(ExportFormat::Pdf, ExportScope::Filtered).unwrap_err();
        assert_eq!(err, DashboardError::Export(ExportError::Unavailable(ExportFormat::Pdf)));
        assert_eq!(vm.notices()[0].level, NoticeLevel::Error);
        assert_eq!(vm.records().len(), 12);
    }

    #[test]
    fn test_export_scopes() {
        let mut vm = view_model().with_exporter(CountingExporter);
        vm.set_search("jakarta");
        let filtered = vm.export(ExportFormat::Csv, ExportScope::Filtered).unwrap();
        assert_eq!(filtered.bytes, b"3".to_vec());
        let all = vm.export(ExportFormat::Csv, ExportScope::All).unwrap();
        assert_eq!(all.bytes, b"12".to_vec());

        vm.set_search("nowhere");
        let err = vm.export(ExportFormat::Csv, ExportScope::CurrentPage).unwrap_err();
        assert_eq!(err, DashboardError::Export(ExportError::Empty));
    }

    #[test]
    fn test_filter_survives_dashboard_switch() {
        let mut states = FilterStateStore::new();
        let mut vm = view_model();
        vm.set_search("jakarta");
        vm.set_category(Some("Pending"));
        vm.save_filter(&mut states);

        let mut fresh = view_model();
        fresh.restore_filter(&states);
        assert_eq!(fresh.filter(), vm.filter());
        assert_eq!(fresh.visible_page().unwrap().items.len(), 3);
    }
}
