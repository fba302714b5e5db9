//! Interactive terminal front end with cliclack styled prompts.
//!
//! Each loop iteration draws the shell's current page as a note and offers
//! the page's actions in a select menu. Notices raised by the workflow are
//! queued and printed before the next page is drawn, so they never
//! interleave with a running spinner.

use bookpro_booking::{availability, ContactField, TimeSlot, WorkflowEvent};
use bookpro_core::i18n::format;
use bookpro_core::message::{Notice, NoticeKind, Page};
use bookpro_core::traits::{Navigator, Notifier};
use std::sync::Mutex;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

use crate::pages::{booking, contact::ContactForm, PageView};
use crate::shell::Shell;

/// Number of upcoming weekdays offered by the date menu.
const DATE_CHOICES: usize = 10;

/// Notifier and navigator for a terminal session.
#[derive(Default)]
pub struct TerminalUi {
    pending: Mutex<Vec<Notice>>,
}

impl TerminalUi {
    /// Take the queued notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }

    /// Print and clear the queued notices.
    pub fn flush(&self) -> std::io::Result<()> {
        for notice in self.drain() {
            let text = format!("{}\n{}", notice.title, notice.message);
            match notice.kind {
                NoticeKind::Success => cliclack::log::success(text)?,
                NoticeKind::Info => cliclack::log::info(text)?,
                NoticeKind::Error => cliclack::log::error(text)?,
            }
        }
        Ok(())
    }
}

impl Notifier for TerminalUi {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(Notice::new(kind, title, message));
        }
    }
}

impl Navigator for TerminalUi {
    fn navigate(&self, page: Page) {
        debug!("navigate: {page}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Book(&'static str),
    Open(Page),
    Date,
    Time,
    Field(ContactField),
    Submit,
    Back,
    Close,
    SendMessage,
    ToggleLocale,
    Quit,
}

/// Section text of a page, without its title.
fn body(view: &PageView) -> String {
    let mut out = Vec::new();
    for section in &view.sections {
        out.push(console::style(&section.heading).bold().to_string());
        out.extend(section.lines.iter().filter(|l| !l.is_empty()).cloned());
        out.push(String::new());
    }
    out.push(format!("{} · {}", view.footer.heading, view.footer.lines.join(" · ")));
    out.join("\n")
}

/// Navigation bar entries plus the locale switch and quit.
fn chrome(shell: &Shell, menu: cliclack::Select<Action>) -> cliclack::Select<Action> {
    let l10n = shell.localizer();
    let mut menu = menu;
    for link in shell.render().nav {
        if !link.active {
            menu = menu.item(Action::Open(link.page), link.label, link.page.path());
        }
    }
    let other = shell.locale().toggled();
    menu.item(
        Action::ToggleLocale,
        l10n.t("lang.switch"),
        l10n.t(&format!("lang.{}", other.as_tag())),
    )
    .item(Action::Quit, l10n.t("quit"), "")
}

/// Run the session until the user quits.
pub async fn run(shell: &mut Shell, ui: &TerminalUi) -> anyhow::Result<()> {
    cliclack::intro(console::style(&shell.agency().name).bold().to_string())?;
    let mut events = shell.workflow().subscribe();

    loop {
        ui.flush()?;
        let view = shell.render();
        cliclack::note(&view.title, body(&view))?;

        let action = match shell.page() {
            Page::Services => services_menu(shell)?,
            Page::Booking => booking_menu(shell)?,
            Page::Confirmation => confirmation_menu(shell)?,
            Page::About => chrome(shell, cliclack::select("")).interact()?,
            Page::Contact => {
                let l10n = shell.localizer();
                let menu = cliclack::select("")
                    .item(Action::SendMessage, l10n.t("contact.form.send"), "");
                chrome(shell, menu).interact()?
            }
        };

        let keep_going = apply(shell, action).await?;
        trace_events(&mut events);
        if !keep_going {
            break;
        }
    }

    ui.flush()?;
    cliclack::outro(shell.localizer().t("footer.tagline"))?;
    Ok(())
}

fn services_menu(shell: &Shell) -> std::io::Result<Action> {
    let mut menu = cliclack::select(shell.localizer().t("services.title"));
    for card in shell.service_selector().cards() {
        menu = menu.item(
            Action::Book(card.id),
            &card.name,
            format!("{} · {}", card.duration_label, card.price_label),
        );
    }
    chrome(shell, menu).interact()
}

fn booking_menu(shell: &Shell) -> std::io::Result<Action> {
    let l10n = shell.localizer();
    let draft = shell.workflow().draft();
    let date_hint = draft
        .date
        .map(|d| format::long_date(l10n.locale(), d))
        .unwrap_or_default();
    let time_hint = draft.time.map(|t| t.to_string()).unwrap_or_default();

    let mut menu = cliclack::select(l10n.t("booking.datetime.title"))
        .item(Action::Date, l10n.t("booking.date.label"), date_hint)
        .item(Action::Time, l10n.t("booking.time.label"), time_hint);
    for field in ContactField::ALL {
        menu = menu.item(
            Action::Field(field),
            booking::field_label(l10n, field),
            draft.contact.get(field),
        );
    }
    menu.item(Action::Submit, booking::submit_label(l10n, shell.workflow()), "")
        .item(Action::Back, l10n.t("booking.back"), "")
        .item(Action::ToggleLocale, l10n.t("lang.switch"), "")
        .item(Action::Quit, l10n.t("quit"), "")
        .interact()
}

fn confirmation_menu(shell: &Shell) -> std::io::Result<Action> {
    let l10n = shell.localizer();
    cliclack::select(l10n.t("booking.confirmation.title"))
        .item(Action::Close, l10n.t("booking.confirmation.close"), "")
        .item(Action::ToggleLocale, l10n.t("lang.switch"), "")
        .item(Action::Quit, l10n.t("quit"), "")
        .interact()
}

/// Log the workflow events raised since the last call. Returns how many
/// were seen.
fn trace_events(events: &mut broadcast::Receiver<WorkflowEvent>) -> usize {
    let mut seen = 0;
    loop {
        match events.try_recv() {
            Ok(event) => {
                seen += 1;
                debug!("workflow event: {event:?}");
            }
            Err(TryRecvError::Lagged(skipped)) => debug!("{skipped} workflow events dropped"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return seen,
        }
    }
}

/// Carry out `action`. Returns `false` when the session should end.
async fn apply(shell: &mut Shell, action: Action) -> anyhow::Result<bool> {
    match action {
        Action::Book(id) => {
            if let Err(e) = shell.choose_service(id) {
                cliclack::log::error(e.to_string())?;
            }
        }
        Action::Open(page) => {
            shell.open(page);
        }
        Action::Date => pick_date(shell)?,
        Action::Time => pick_time(shell)?,
        Action::Field(field) => edit_field(shell, field)?,
        Action::Submit => submit(shell).await?,
        Action::Back => shell.back_to_services(),
        Action::Close => shell.dismiss_confirmation(),
        Action::SendMessage => send_message(shell)?,
        Action::ToggleLocale => {
            shell.toggle_locale();
        }
        Action::Quit => return Ok(false),
    }
    Ok(true)
}

fn pick_date(shell: &mut Shell) -> anyhow::Result<()> {
    let l10n = *shell.localizer();
    let mut menu = cliclack::select(l10n.t("booking.date.label"));
    for date in availability::upcoming(shell.workflow().today(), DATE_CHOICES) {
        menu = menu.item(date, format::long_date(l10n.locale(), date), "");
    }
    let date = menu.interact()?;
    if let Err(e) = shell.workflow_mut().select_date(date) {
        cliclack::log::error(e.to_string())?;
    }
    Ok(())
}

fn pick_time(shell: &mut Shell) -> anyhow::Result<()> {
    let l10n = *shell.localizer();
    let mut menu = cliclack::select(l10n.t("booking.time.label"));
    for slot in TimeSlot::all() {
        menu = menu.item(slot, slot.to_string(), "");
    }
    let slot = menu.interact()?;
    shell.workflow_mut().select_time(slot)?;
    Ok(())
}

/// Input that clears a field. Empty input keeps the current value.
const CLEAR_INPUT: &str = "-";

/// What an edit does to a field: `None` keeps it, `Some` replaces it.
fn field_edit(current: &str, input: &str) -> Option<String> {
    match input.trim() {
        CLEAR_INPUT => Some(String::new()),
        "" if !current.is_empty() => None,
        value => Some(value.to_string()),
    }
}

fn edit_field(shell: &mut Shell, field: ContactField) -> anyhow::Result<()> {
    let l10n = *shell.localizer();
    let current = shell.workflow().draft().contact.get(field).to_string();
    let placeholder = match (current.is_empty(), field) {
        (false, _) => format!(
            "{current} ({})",
            l10n.t_with("booking.clear.hint", &[("input", CLEAR_INPUT)])
        ),
        (true, ContactField::Message) => l10n.t("booking.message.placeholder"),
        (true, _) => String::new(),
    };
    let input: String = cliclack::input(booking::field_label(&l10n, field))
        .placeholder(&placeholder)
        .required(false)
        .interact()?;
    if let Some(value) = field_edit(&current, &input) {
        shell.workflow_mut().set_field(field, value)?;
    }
    Ok(())
}

/// Submit with a spinner. Ctrl-C cancels the in-flight request.
async fn submit(shell: &mut Shell) -> anyhow::Result<()> {
    let l10n = *shell.localizer();
    let spinner = cliclack::spinner();
    spinner.start(l10n.t("booking.submitting"));

    let cancel = shell.workflow().cancel_token();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });
    let outcome = shell.submit_booking().await;
    watcher.abort();

    match outcome {
        Ok(_) => spinner.stop(l10n.t("booking.confirmed.title")),
        Err(_) => spinner.error(l10n.t("booking.failed.title")),
    }
    Ok(())
}

fn send_message(shell: &mut Shell) -> anyhow::Result<()> {
    let l10n = *shell.localizer();
    let [name, email, subject, message] = ContactForm::labels(&l10n);
    let form = ContactForm {
        name: cliclack::input(name).required(false).interact()?,
        email: cliclack::input(email).required(false).interact()?,
        subject: cliclack::input(subject).required(false).interact()?,
        message: cliclack::input(message).required(false).interact()?,
    };
    *shell.contact_form_mut() = form;
    shell.send_contact_form();
    cliclack::log::success(l10n.t("contact.form.send"))?;
    Ok(())
}
