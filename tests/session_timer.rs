use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use timed_quiz::{AppEvent, Event, Question, QuizStatus, QuizStore};

fn questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            text: format!("Question {}", i + 1),
            options: vec!["yes".to_string(), "no".to_string()],
            correct_option: 0,
            points: 10,
        })
        .collect()
}

fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
    let mut count = 0;
    while rx.try_recv().is_ok() {
        count += 1;
    }
    count
}

#[tokio::test(start_paused = true)]
async fn countdown_finishes_session_and_stops_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = QuizStore::new(tx);
    store.dispatch(Event::QuestionsLoaded(questions(2))).unwrap();
    store.dispatch(Event::Start).unwrap();
    assert_eq!(store.state().seconds_remaining, Some(60));

    let mut ticks = 0;
    while store.state().status == QuizStatus::Active {
        let Some(AppEvent::Tick(session)) = rx.recv().await else {
            panic!("expected a tick");
        };
        store.tick(session).unwrap();
        ticks += 1;
    }

    assert_eq!(ticks, 60);
    assert_eq!(store.state().status, QuizStatus::Finished);
    assert_eq!(store.state().seconds_remaining, Some(0));
    assert!(store.session().is_none());

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(drain(&mut rx), 0);
}

#[tokio::test(start_paused = true)]
async fn finish_stops_ticks_immediately() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = QuizStore::new(tx);
    store.dispatch(Event::QuestionsLoaded(questions(1))).unwrap();
    store.dispatch(Event::Start).unwrap();

    time::sleep(Duration::from_millis(2500)).await;
    while let Ok(AppEvent::Tick(session)) = rx.try_recv() {
        store.tick(session).unwrap();
    }
    assert_eq!(store.state().seconds_remaining, Some(28));

    store.dispatch(Event::AnswerSelected(0)).unwrap();
    store.dispatch(Event::Finish).unwrap();
    assert_eq!(store.state().highscore, 10);

    time::sleep(Duration::from_secs(30)).await;
    assert_eq!(drain(&mut rx), 0);
}

#[tokio::test(start_paused = true)]
async fn restart_and_start_yield_a_single_tick_stream() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = QuizStore::new(tx);
    store.dispatch(Event::QuestionsLoaded(questions(3))).unwrap();

    store.dispatch(Event::Start).unwrap();
    let old = store.session().unwrap();
    time::sleep(Duration::from_millis(1500)).await;

    store.dispatch(Event::Restart).unwrap();
    store.dispatch(Event::Start).unwrap();
    let current = store.session().unwrap();

    time::sleep(Duration::from_millis(3500)).await;

    let mut stale = 0;
    let mut live = 0;
    while let Ok(AppEvent::Tick(session)) = rx.try_recv() {
        if session == old {
            stale += 1;
            assert!(store.tick(session).unwrap().is_none());
        } else {
            assert_eq!(session, current);
            live += 1;
            store.tick(session).unwrap();
        }
    }

    assert_eq!(stale, 1);
    assert_eq!(live, 3);
    assert_eq!(store.state().seconds_remaining, Some(90 - 3));
}

#[tokio::test(start_paused = true)]
async fn reload_while_active_stops_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = QuizStore::new(tx);
    store.dispatch(Event::QuestionsLoaded(questions(1))).unwrap();
    store.dispatch(Event::Start).unwrap();

    store.dispatch(Event::LoadFailed).unwrap();
    assert_eq!(store.state().status, QuizStatus::Error);
    assert!(store.session().is_none());

    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(drain(&mut rx), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_store_stops_the_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = QuizStore::new(tx);
    store.dispatch(Event::QuestionsLoaded(questions(1))).unwrap();
    store.dispatch(Event::Start).unwrap();
    drop(store);

    time::sleep(Duration::from_secs(5)).await;
    assert!(rx.recv().await.is_none());
}
