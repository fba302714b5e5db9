use super::*;
use bookpro_booking::{ContactField, SimulatedSubmitter};
use bookpro_core::message::NoticeKind;
use bookpro_core::traits::{FixedClock, Notifier};
use chrono::NaiveDate;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<Page>>,
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<Page> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.visits.lock().unwrap().push(page);
    }
}

#[derive(Default)]
struct CountingNotifier {
    count: Mutex<usize>,
}

impl Notifier for CountingNotifier {
    fn notify(&self, _kind: NoticeKind, _title: &str, _message: &str) {
        *self.count.lock().unwrap() += 1;
    }
}

fn shell() -> (Shell, Arc<RecordingNavigator>) {
    let today = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
    let workflow = BookingWorkflow::new(
        Arc::new(SimulatedSubmitter::new(Duration::from_millis(2000))),
        Arc::new(CountingNotifier::default()),
        Arc::new(FixedClock(today)),
    );
    let navigator = Arc::new(RecordingNavigator::default());
    let shell = Shell::new(&Config::default(), workflow, navigator.clone());
    (shell, navigator)
}

fn fill(shell: &mut Shell) {
    let wf = shell.workflow_mut();
    wf.select_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .unwrap();
    wf.select_time_str("14:30").unwrap();
    wf.set_field(ContactField::FirstName, "Ana").unwrap();
    wf.set_field(ContactField::LastName, "Silva").unwrap();
    wf.set_field(ContactField::Email, "ana@example.com").unwrap();
}

#[test]
fn test_starts_on_services_in_portuguese() {
    let (shell, navigator) = shell();
    assert_eq!(shell.page(), Page::Services);
    assert_eq!(shell.locale(), Locale::Pt);
    assert!(navigator.visits().is_empty());

    let view = shell.render();
    assert_eq!(view.page, Page::Services);
    assert_eq!(view.nav[0].label, "Serviços");
}

#[test]
fn test_booking_page_needs_a_service() {
    let (mut shell, navigator) = shell();
    assert_eq!(shell.open(Page::Booking), Page::Services);
    assert_eq!(shell.open(Page::Confirmation), Page::Services);
    assert_eq!(navigator.visits(), vec![Page::Services, Page::Services]);
}

#[test]
fn test_choose_service_opens_booking() {
    let (mut shell, navigator) = shell();
    shell.choose_service("review").unwrap();
    assert_eq!(shell.page(), Page::Booking);
    assert_eq!(shell.workflow().phase(), Phase::Scheduling);
    assert_eq!(navigator.visits(), vec![Page::Booking]);

    let view = shell.render();
    assert_eq!(view.title, "Revisão de Negócio");
}

#[test]
fn test_unknown_service_stays_put() {
    let (mut shell, navigator) = shell();
    let err = shell.choose_service("massage").unwrap_err();
    assert_eq!(err, BookingError::UnknownService("massage".into()));
    assert_eq!(shell.page(), Page::Services);
    assert!(navigator.visits().is_empty());
}

#[test]
fn test_leaving_booking_abandons_draft() {
    let (mut shell, _) = shell();
    shell.choose_service("consultation").unwrap();
    fill(&mut shell);

    assert_eq!(shell.open(Page::About), Page::About);
    assert_eq!(shell.workflow().phase(), Phase::Selecting);
    assert!(shell.workflow().draft().is_empty());
    assert_eq!(shell.open(Page::Booking), Page::Services);
}

#[test]
fn test_locale_switch_relocalizes_draft() {
    let (mut shell, navigator) = shell();
    shell.choose_service("workshop").unwrap();
    assert_eq!(shell.toggle_locale(), Locale::En);

    let service = shell.workflow().draft().service.clone().unwrap();
    assert_eq!(service.name, "Leadership Workshop");
    assert_eq!(shell.render().title, "Leadership Workshop");
    assert_eq!(navigator.visits(), vec![Page::Booking, Page::Booking]);
}

#[tokio::test(start_paused = true)]
async fn test_submit_then_dismiss() {
    let (mut shell, navigator) = shell();
    shell.choose_service("strategy").unwrap();
    fill(&mut shell);

    let receipt = shell.submit_booking().await.unwrap();
    assert_eq!(receipt.service.id, "strategy");
    assert_eq!(shell.page(), Page::Confirmation);
    assert_eq!(shell.open(Page::Confirmation), Page::Confirmation);

    shell.dismiss_confirmation();
    assert_eq!(shell.page(), Page::Services);
    assert_eq!(shell.workflow().phase(), Phase::Selecting);
    assert_eq!(
        navigator.visits(),
        vec![
            Page::Booking,
            Page::Confirmation,
            Page::Confirmation,
            Page::Services
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_keeps_booking_page() {
    let (mut shell, _) = shell();
    shell.choose_service("strategy").unwrap();

    let err = shell.submit_booking().await.unwrap_err();
    assert_eq!(err, BookingError::MissingDateTime);
    assert_eq!(shell.page(), Page::Booking);
}

#[test]
fn test_contact_form_send_clears_it() {
    let (mut shell, _) = shell();
    shell.open(Page::Contact);
    shell.contact_form_mut().message = "Olá".into();
    shell.send_contact_form();
    assert_eq!(*shell.contact_form_mut(), ContactForm::default());
}

#[tokio::test(start_paused = true)]
async fn test_rebook_after_cancelled_submit() {
    let (mut shell, _) = shell();
    shell.choose_service("strategy").unwrap();
    fill(&mut shell);
    let token = shell.workflow().cancel_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        token.cancel();
    });
    assert_eq!(
        shell.submit_booking().await.unwrap_err(),
        BookingError::Cancelled
    );
    assert_eq!(shell.page(), Page::Booking);

    shell.back_to_services();
    shell.choose_service("review").unwrap();
    fill(&mut shell);
    let receipt = shell.submit_booking().await.unwrap();
    assert_eq!(receipt.service.id, "review");
    assert_eq!(shell.page(), Page::Confirmation);
}
