//! End-to-end lifecycle scenarios against recording doubles

use super::mock::{Call, CallLog, MockBackend, MockBackendError, MockWindowSystem};
use crate::capabilities::platform::{InstanceFlags, PlatformTag, PORTABILITY_ENUMERATION_EXTENSION};
use crate::core::config::ApplicationConfig;
use crate::render::bootstrap::BootstrapError;
use crate::render::window::WindowError;
use crate::{AppError, Application, LifecycleState};

type TestApp = Application<MockWindowSystem, MockBackend>;

fn app(platform: PlatformTag) -> TestApp {
    Application::new(ApplicationConfig::default()).with_platform(platform)
}

#[test]
fn test_scenario_a_all_required_available() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    let result = app.run(
        || Ok(MockWindowSystem::new(&log, &["surface", "platform_surface"])),
        || Ok(MockBackend::new(&log, &["surface", "platform_surface"])),
    );

    assert!(result.is_ok());
    assert_eq!(
        app.history(),
        [
            LifecycleState::Uninitialized,
            LifecycleState::WindowReady,
            LifecycleState::BackendReady,
            LifecycleState::Running,
            LifecycleState::Terminated,
        ]
    );

    let requests = log.create_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].extensions, ["surface", "platform_surface"]);
    assert_eq!(requests[0].metadata.application_name, "Hello Triangle");
}

#[test]
fn test_scenario_b_missing_capability_never_creates_instance() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    let result = app.run(
        || Ok(MockWindowSystem::new(&log, &["surface", "platform_surface"])),
        || Ok(MockBackend::new(&log, &["surface"])),
    );

    let Err(AppError::Bootstrap(BootstrapError::VerificationFailure { missing })) = result else {
        panic!("expected verification failure, got {result:?}");
    };
    assert_eq!(missing, ["platform_surface"]);
    assert_eq!(log.count(|call| matches!(call, Call::CreateInstance(_))), 0);
    assert!(!app.history().contains(&LifecycleState::Running));
    assert!(!app.history().contains(&LifecycleState::BackendReady));
    assert_eq!(app.state(), LifecycleState::Terminated);

    // Window still released on the failure path.
    assert_eq!(log.count(|call| *call == Call::DestroyWindow), 1);
    assert_eq!(log.count(|call| *call == Call::ShutdownWindowing), 1);
}

#[test]
fn test_scenario_c_nothing_required() {
    for (platform, expected) in [
        (PlatformTag::Linux, Vec::<&str>::new()),
        (PlatformTag::Apple, vec![PORTABILITY_ENUMERATION_EXTENSION]),
    ] {
        let log = CallLog::default();
        let mut app = app(platform);

        app.run(
            || Ok(MockWindowSystem::new(&log, &[])),
            || Ok(MockBackend::new(&log, &["surface", "platform_surface", "debug_utils"])),
        )
        .unwrap();

        let requests = log.create_requests();
        assert_eq!(requests.len(), 1, "{platform}");
        assert_eq!(requests[0].extensions, expected, "{platform}");
        assert_eq!(
            requests[0].flags.contains(InstanceFlags::ENUMERATE_PORTABILITY),
            platform == PlatformTag::Apple
        );
    }
}

#[test]
fn test_release_order_instance_before_window() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    app.run(
        || Ok(MockWindowSystem::new(&log, &["surface"]).closing_after(3)),
        || Ok(MockBackend::new(&log, &["surface"])),
    )
    .unwrap();

    assert_eq!(log.count(|call| *call == Call::DestroyInstance), 1);
    assert_eq!(log.count(|call| *call == Call::DestroyWindow), 1);
    assert_eq!(log.count(|call| *call == Call::ShutdownWindowing), 1);

    let instance = log.position(&Call::DestroyInstance).unwrap();
    let window = log.position(&Call::DestroyWindow).unwrap();
    let windowing = log.position(&Call::ShutdownWindowing).unwrap();
    assert!(instance < window);
    assert!(window < windowing);
}

#[test]
fn test_polls_until_close_requested() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    app.run(
        || Ok(MockWindowSystem::new(&log, &[]).closing_after(5)),
        || Ok(MockBackend::new(&log, &[])),
    )
    .unwrap();

    assert_eq!(log.count(|call| *call == Call::PollEvents), 5);
    // No polling before the instance exists.
    let first_poll = log.position(&Call::PollEvents).unwrap();
    let create = log.count(|call| matches!(call, Call::CreateInstance(_)));
    assert_eq!(create, 1);
    assert!(log.calls()[..first_poll].iter().any(|call| matches!(call, Call::CreateInstance(_))));
}

#[test]
fn test_startup_order_and_single_requirement_query() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    app.run(
        || Ok(MockWindowSystem::new(&log, &["surface"])),
        || Ok(MockBackend::new(&log, &["surface"])),
    )
    .unwrap();

    let calls = log.calls();
    assert_eq!(calls[0], Call::InitWindowing);
    assert_eq!(calls[1], Call::CreateWindow("Vulkan".to_string()));
    assert_eq!(calls[2], Call::RequiredCapabilities);
    assert_eq!(calls[3], Call::EnumerateCapabilities);
    assert!(matches!(calls[4], Call::CreateInstance(_)));
    assert_eq!(log.count(|call| *call == Call::RequiredCapabilities), 1);
}

#[test]
fn test_window_init_failure_skips_backend() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);
    let mut backend_connected = false;

    let result = app.run(
        || Err(WindowError::InitializationFailed("no display".to_string())),
        || {
            backend_connected = true;
            Ok(MockBackend::new(&log, &[]))
        },
    );

    assert!(matches!(result, Err(AppError::WindowInit(WindowError::InitializationFailed(_)))));
    assert!(!backend_connected);
    assert!(log.calls().is_empty());
    assert_eq!(app.history(), [LifecycleState::Uninitialized, LifecycleState::Terminated]);
}

#[test]
fn test_window_creation_failure_shuts_down_windowing() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    let result = app.run(
        || Ok(MockWindowSystem::new(&log, &[]).failing_window_creation()),
        || Ok(MockBackend::new(&log, &[])),
    );

    assert!(matches!(result, Err(AppError::WindowInit(WindowError::CreationFailed { .. }))));
    assert_eq!(log.calls(), [Call::InitWindowing, Call::ShutdownWindowing]);
}

#[test]
fn test_unreachable_backend_releases_window() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    let result = app.run(
        || Ok(MockWindowSystem::new(&log, &["surface"])),
        || Err(MockBackendError("loader missing".to_string())),
    );

    assert!(matches!(result, Err(AppError::Bootstrap(BootstrapError::CapabilityQuery(_)))));
    assert_eq!(log.count(|call| *call == Call::DestroyWindow), 1);
    assert_eq!(app.state(), LifecycleState::Terminated);
}

#[test]
fn test_backend_rejection_after_verification() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    let result = app.run(
        || Ok(MockWindowSystem::new(&log, &["surface"])),
        || Ok(MockBackend::new(&log, &["surface"]).rejecting("VK_ERROR_INCOMPATIBLE_DRIVER")),
    );

    let error = result.unwrap_err();
    assert!(matches!(error, AppError::Bootstrap(BootstrapError::BackendRejection(_))));
    assert!(error.to_string().contains("VK_ERROR_INCOMPATIBLE_DRIVER"));
    assert_eq!(log.count(|call| *call == Call::DestroyInstance), 0);
    assert_eq!(log.count(|call| *call == Call::DestroyWindow), 1);
}

#[test]
fn test_terminate_runs_once() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    app.run(
        || Ok(MockWindowSystem::new(&log, &[])),
        || Ok(MockBackend::new(&log, &[])),
    )
    .unwrap();
    app.terminate();
    drop(app);

    assert_eq!(log.count(|call| *call == Call::DestroyInstance), 1);
    assert_eq!(log.count(|call| *call == Call::DestroyWindow), 1);
    assert_eq!(log.count(|call| *call == Call::ShutdownWindowing), 1);
}

#[test]
fn test_second_run_is_rejected() {
    let log = CallLog::default();
    let mut app = app(PlatformTag::Linux);

    app.run(
        || Ok(MockWindowSystem::new(&log, &["surface"])),
        || Ok(MockBackend::new(&log, &["surface"])),
    )
    .unwrap();
    let first_run = log.calls();

    let mut windowing_called = false;
    let result = app.run(
        || {
            windowing_called = true;
            Ok(MockWindowSystem::new(&log, &["surface"]))
        },
        || Ok(MockBackend::new(&log, &["surface"])),
    );

    assert!(matches!(
        result,
        Err(AppError::AlreadyStarted { state: LifecycleState::Terminated })
    ));
    assert!(!windowing_called);
    assert_eq!(log.calls(), first_run);
    assert_eq!(log.count(|call| matches!(call, Call::CreateInstance(_))), 1);
    assert_eq!(app.history().last(), Some(&LifecycleState::Terminated));
    assert_eq!(app.history().len(), 5);
}

#[test]
fn test_window_error_message_not_prefixed_twice() {
    let error = AppError::from(WindowError::InitializationFailed("no display".to_string()));
    assert_eq!(error.to_string(), "Windowing initialization failed: no display");
}
