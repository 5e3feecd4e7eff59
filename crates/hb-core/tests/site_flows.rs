//! End-to-end flows through the controller, chrome and page models

use hb_core::chrome::{self, DONATE_NOW};
use hb_core::{
    ContactField, ContactPageState, FallbackImage, Page, ScrollLock, SiteContent, SiteController,
    Viewport, ACKNOWLEDGMENT,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct RecordingViewport {
    position: Cell<(f64, f64)>,
    scrolls: Cell<usize>,
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, x: f64, y: f64) {
        self.position.set((x, y));
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[derive(Default)]
struct RecordingLock {
    events: RefCell<Vec<&'static str>>,
}

impl RecordingLock {
    fn is_locked(&self) -> bool {
        self.events.borrow().last() == Some(&"lock")
    }
}

impl ScrollLock for RecordingLock {
    fn lock(&self) {
        self.events.borrow_mut().push("lock");
    }

    fn unlock(&self) {
        self.events.borrow_mut().push("unlock");
    }
}

struct Site {
    controller: SiteController<Rc<RecordingViewport>, Rc<RecordingLock>>,
    viewport: Rc<RecordingViewport>,
    lock: Rc<RecordingLock>,
    content: SiteContent,
}

impl Site {
    fn new() -> Self {
        let viewport = Rc::new(RecordingViewport::default());
        let lock = Rc::new(RecordingLock::default());
        // Start scrolled down so a reset is observable.
        viewport.position.set((0.0, 1200.0));
        Self {
            controller: SiteController::new(viewport.clone(), lock.clone()),
            viewport,
            lock,
            content: SiteContent::embedded().expect("embedded content"),
        }
    }

    fn displayed_heading(&self) -> &str {
        &self.content.page_copy(self.controller.active_page()).heading
    }

    fn selected_label(&self) -> &'static str {
        let selected: Vec<_> = chrome::primary_links(self.controller.active_page())
            .into_iter()
            .filter(|l| l.selected)
            .collect();
        assert_eq!(selected.len(), 1);
        selected[0].label
    }
}

#[test]
fn test_every_page_is_reachable_and_selected() {
    let mut site = Site::new();
    let expected = [
        (Page::Home, "Building Bridges to a Brighter Future", "Home"),
        (Page::About, "Our Mission", "About Us"),
        (Page::Work, "Our Work & Projects", "Our Work"),
        (Page::GetInvolved, "Get Involved", "Get Involved"),
        (Page::Contact, "Contact Us", "Contact"),
    ];
    for (page, heading, label) in expected {
        site.controller.navigate(page);
        assert_eq!(site.controller.active_page(), page);
        assert_eq!(site.displayed_heading(), heading);
        assert_eq!(site.selected_label(), label);
    }
}

#[test]
fn test_navigate_always_closes_menu_and_scrolls_to_top() {
    let mut site = Site::new();
    for (i, page) in Page::ALL.into_iter().cycle().take(10).enumerate() {
        if i % 2 == 0 {
            site.controller.toggle_menu();
        }
        site.viewport.position.set((0.0, 640.0));
        site.controller.navigate(page);
        assert!(!site.controller.is_menu_open());
        assert!(!site.lock.is_locked());
        assert_eq!(site.viewport.position.get(), (0.0, 0.0));
    }
    assert_eq!(site.viewport.scrolls.get(), 10);
}

#[test]
fn test_toggle_parity() {
    for n in 0..7 {
        let mut site = Site::new();
        for _ in 0..n {
            site.controller.toggle_menu();
        }
        assert_eq!(site.controller.is_menu_open(), n % 2 == 1);
        assert_eq!(site.lock.is_locked(), n % 2 == 1);
    }
}

#[test]
fn test_lock_events_strictly_alternate() {
    let mut site = Site::new();
    site.controller.toggle_menu();
    site.controller.toggle_menu();
    site.controller.toggle_menu();
    site.controller.navigate(Page::Work);
    site.controller.navigate(Page::Home);
    site.controller.toggle_menu();
    drop(site.controller);
    assert_eq!(
        *site.lock.events.borrow(),
        vec!["lock", "unlock", "lock", "unlock", "lock", "unlock"]
    );
}

#[test]
fn test_contact_scenario() {
    let mut site = Site::new();
    assert_eq!(site.controller.active_page(), Page::Home);

    site.controller.navigate(Page::Contact);
    assert_eq!(site.displayed_heading(), "Contact Us");

    let mut contact = ContactPageState::new();
    contact.set_field(ContactField::Name, "Sam Rivera");
    contact.set_field(ContactField::Email, "sam@example.org");
    contact.set_field(ContactField::Subject, "Partnership");
    contact.set_field(ContactField::Message, "We'd like to sponsor a well.");

    assert_eq!(contact.submit(), ACKNOWLEDGMENT);
    assert_eq!(
        contact.acknowledgment(),
        Some("Thank you for your message! We will get back to you soon.")
    );
    for field in ContactField::ALL {
        assert_eq!(contact.form().get(field), "");
    }
    assert_eq!(site.controller.active_page(), Page::Contact);
}

#[test]
fn test_contact_whitespace_submission_acknowledged() {
    let mut contact = ContactPageState::new();
    for field in ContactField::ALL {
        contact.set_field(field, "   ");
    }
    assert_eq!(contact.submit(), ACKNOWLEDGMENT);
    assert_eq!(contact.acknowledgment(), Some(ACKNOWLEDGMENT));
    for field in ContactField::ALL {
        assert_eq!(contact.form().get(field), "");
    }
}

#[test]
fn test_mobile_menu_scenario() {
    let mut site = Site::new();
    assert!(site.controller.toggle_menu());
    assert!(site.lock.is_locked());

    let about = chrome::primary_links(site.controller.active_page())
        .into_iter()
        .find(|l| l.label == "About Us")
        .expect("about link");
    site.controller.navigate(about.target);

    assert!(!site.controller.is_menu_open());
    assert_eq!(site.controller.active_page(), Page::About);
    assert_eq!(site.viewport.position.get(), (0.0, 0.0));
    assert!(!site.lock.is_locked());
}

#[test]
fn test_overlay_donate_now_goes_to_get_involved() {
    let mut site = Site::new();
    site.controller.toggle_menu();
    site.controller.navigate(DONATE_NOW.target);
    assert_eq!(site.displayed_heading(), "Get Involved");
    assert!(!site.lock.is_locked());
}

#[test]
fn test_every_catalog_image_falls_back_once() {
    let site = Site::new();
    let sources = site
        .content
        .about
        .team
        .iter()
        .map(|m| m.image.clone())
        .chain(site.content.work.projects.iter().map(|p| p.image.clone()));
    for source in sources {
        let mut image = FallbackImage::new(source.clone());
        assert_eq!(image.on_error(), Some(source.fallback.as_str()));
        assert_eq!(image.on_error(), None);
        assert_eq!(image.current_src(), source.fallback);
    }
}
