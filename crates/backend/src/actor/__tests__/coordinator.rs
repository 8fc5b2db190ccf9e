//! Coordinator E2E tests: delegation through the reply adapter.

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use crate::{
    actor::{
      __tests__::helpers::{ActorTestContext, RECV_TIMEOUT, assert_quiet, recv_within},
      message::{Count, Counted},
    },
    domain::frequency::{FrequencyMap, count_words},
  };

  /// Test: "Life is Life" through coordinator and its own worker.
  #[tokio::test]
  async fn test_coordinator_counts_life_is_life() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut aggregated) = ctx.spawn_coordinator();

    coordinator.get_frequencies("Life is Life").unwrap();

    let result = recv_within(&mut aggregated, RECV_TIMEOUT).await.expect("aggregated result");
    assert_eq!(result, FrequencyMap::from([("Life", 2), ("is", 1)]));
  }

  /// Test: "Dog eat Dog" keeps case, no folding.
  #[tokio::test]
  async fn test_coordinator_counts_dog_eat_dog() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut aggregated) = ctx.spawn_coordinator();

    coordinator.get_frequencies("Dog eat Dog").unwrap();

    let result = recv_within(&mut aggregated, RECV_TIMEOUT).await.expect("aggregated result");
    assert_eq!(result, FrequencyMap::from([("Dog", 2), ("eat", 1)]));
  }

  /// Test: two requests produce exactly two results, in either order.
  #[tokio::test]
  async fn test_coordinator_two_requests_two_results() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut aggregated) = ctx.spawn_coordinator();

    coordinator.get_frequencies("Life is Life").unwrap();
    coordinator.get_frequencies("Dog eat Dog").unwrap();

    let mut results = vec![
      recv_within(&mut aggregated, RECV_TIMEOUT).await.expect("first result"),
      recv_within(&mut aggregated, RECV_TIMEOUT).await.expect("second result"),
    ];
    results.sort_by_key(|m| m.to_string());

    assert_eq!(
      results,
      vec![
        FrequencyMap::from([("Dog", 2), ("eat", 1)]),
        FrequencyMap::from([("Life", 2), ("is", 1)]),
      ]
    );
    assert_quiet(&mut aggregated).await;
  }

  /// Test: the worker sees exactly one Count with the same text, and the
  /// reply comes back exactly once as an aggregation equal to the direct count.
  #[tokio::test]
  async fn test_delegation_forwards_text_and_adapts_reply() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut worker_rx, mut aggregated) = ctx.spawn_coordinator_with_probe();
    let text = "the cat and the hat";

    coordinator.get_frequencies(text).unwrap();

    let Count { text: delegated, reply_to } = recv_within(&mut worker_rx, RECV_TIMEOUT)
      .await
      .expect("delegated count");
    assert_eq!(delegated, text);
    assert_quiet(&mut worker_rx).await;

    // Nothing is aggregated until the worker replies
    assert_quiet(&mut aggregated).await;

    reply_to
      .tell(Counted {
        frequencies: count_words(&delegated),
      })
      .unwrap();

    let result = recv_within(&mut aggregated, RECV_TIMEOUT).await.expect("aggregated result");
    assert_eq!(result, count_words(text));
    assert_quiet(&mut aggregated).await;
  }

  /// Test: the adapter is reusable across requests; each delegation gets its own reply.
  #[tokio::test]
  async fn test_delegation_one_count_per_request() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut worker_rx, mut aggregated) = ctx.spawn_coordinator_with_probe();

    coordinator.get_frequencies("one").unwrap();
    coordinator.get_frequencies("two two").unwrap();

    // Single sender to single receiver: arrival order matches send order
    let first = recv_within(&mut worker_rx, RECV_TIMEOUT).await.expect("first count");
    let second = recv_within(&mut worker_rx, RECV_TIMEOUT).await.expect("second count");
    assert_eq!(first.text, "one");
    assert_eq!(second.text, "two two");
    assert_quiet(&mut worker_rx).await;

    // Answer out of order
    second
      .reply_to
      .tell(Counted {
        frequencies: count_words(&second.text),
      })
      .unwrap();
    first
      .reply_to
      .tell(Counted {
        frequencies: count_words(&first.text),
      })
      .unwrap();

    assert_eq!(
      recv_within(&mut aggregated, RECV_TIMEOUT).await,
      Some(FrequencyMap::from([("two", 2)]))
    );
    assert_eq!(
      recv_within(&mut aggregated, RECV_TIMEOUT).await,
      Some(FrequencyMap::from([("one", 1)]))
    );
  }

  /// Test: a worker that never replies leaves the coordinator responsive.
  #[tokio::test]
  async fn test_coordinator_not_blocked_by_silent_worker() {
    let ctx = ActorTestContext::new();
    let (coordinator, mut worker_rx, mut aggregated) = ctx.spawn_coordinator_with_probe();

    coordinator.get_frequencies("ignored").unwrap();
    let ignored = recv_within(&mut worker_rx, RECV_TIMEOUT).await.expect("first count");

    coordinator.get_frequencies("answered").unwrap();
    let answered = recv_within(&mut worker_rx, RECV_TIMEOUT).await.expect("second count");
    answered
      .reply_to
      .tell(Counted {
        frequencies: count_words(&answered.text),
      })
      .unwrap();

    assert_eq!(
      recv_within(&mut aggregated, RECV_TIMEOUT).await,
      Some(FrequencyMap::from([("answered", 1)]))
    );
    drop(ignored);
    assert_quiet(&mut aggregated).await;
  }

  /// Test: coordinator and its worker stop when cancelled.
  #[tokio::test]
  async fn test_coordinator_stops_on_cancel() {
    let ctx = ActorTestContext::new();
    let (coordinator, _aggregated) = ctx.spawn_coordinator();

    ctx.cancel.cancel();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert!(coordinator.addr().is_closed());
    assert!(coordinator.get_frequencies("too late").is_err());
  }
}
