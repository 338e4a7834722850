// src/views.rs
//
// Os view-models da camada de apresentação: estruturas puras que recebem
// dados já buscados e respondem exatamente o que a tela deve exibir.
// Nenhum deles guarda estado de rede próprio além do resultado do `load`.

pub mod admin_dashboard;
pub mod meal_card;
pub mod vendor_dashboard;

use std::future::Future;

use tokio::task::JoinHandle;

// Guarda de tarefa amarrada ao ciclo de vida de uma view: se a view for
// descartada antes do fetch terminar, a tarefa é abortada e a resposta
// atrasada nunca é aplicada.
pub struct ViewTask<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> ViewTask<T> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    // Espera o resultado. `None` se a tarefa foi abortada no meio.
    pub async fn join(mut self) -> Option<T> {
        (&mut self.handle).await.ok()
    }
}

impl<T> Drop for ViewTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_dropped_view_task_never_applies_its_result() {
        let applied = Arc::new(AtomicBool::new(false));
        let flag = applied.clone();

        let task = ViewTask::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        // A "view" é descartada antes da resposta chegar
        drop(task);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!applied.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_joined_view_task_yields_its_result() {
        let task = ViewTask::spawn(async { 7 });
        assert_eq!(task.join().await, Some(7));
    }
}
