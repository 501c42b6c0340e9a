pub mod greet;

use std::sync::Arc;

use crate::router::HandlerRouter;

pub fn register_builtin_handlers(router: &mut HandlerRouter) {
  router.register("greet", Arc::new(greet::GreetHandler));
}
