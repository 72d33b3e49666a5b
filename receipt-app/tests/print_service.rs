use std::time::Duration;

use chrono::{TimeZone, Utc};
use receipt_app::{
    EscPosQrRenderer, LocalPrintService, PrintingFailure, PrintingService, QrRenderer,
};
use receipt_core::{ContentType, Document, LineItem, PrinterHandle, render_document};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

fn document() -> Document {
    let items = vec![
        LineItem::parse("Coffee", "2.5").unwrap(),
        LineItem::parse("Bagel", "3").unwrap(),
    ];
    let ts = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
    render_document(&items, &ts)
}

#[tokio::test]
async fn test_print_to_network_printer() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let dir = tempfile::tempdir().unwrap();
    let service = LocalPrintService::new(dir.path())
        .with_paper_width(32)
        .with_timeout(Duration::from_secs(2));
    let target = PrinterHandle::new("Counter", Some(format!("tcp://{}", addr)));

    service.print(&document(), Some(&target)).await.unwrap();

    let received = server.await.unwrap();
    let text = String::from_utf8_lossy(&received);
    assert_eq!(&received[..2], &[0x1B, 0x40]);
    assert!(text.contains("Coffee                     $2.50\n"));
    assert!(text.contains("Thanks for choosing us\n"));
}

#[tokio::test]
async fn test_print_falls_back_to_default_spool() {
    let dir = tempfile::tempdir().unwrap();
    let spool = dir.path().join("spool.bin");
    let code = EscPosQrRenderer.render("https://insyllium.example/r/1", 6);
    let service = LocalPrintService::new(dir.path().join("exports"))
        .with_default_printer(PrinterHandle::new(
            "default",
            Some(format!("file://{}", spool.display())),
        ))
        .with_qr_footer(code.clone());

    service.print(&document(), None).await.unwrap();
    service.print_code(&code, None).await.unwrap();

    let data = std::fs::read(&spool).unwrap();
    let occurrences = data
        .windows(code.commands.len())
        .filter(|w| *w == code.commands.as_slice())
        .count();
    // Once as receipt footer, once as standalone ticket
    assert_eq!(occurrences, 2);
    let text = String::from_utf8_lossy(&data);
    assert!(text.contains("Total"));
    assert!(text.contains("$5.50"));
}

#[tokio::test]
async fn test_print_without_any_printer() {
    let dir = tempfile::tempdir().unwrap();
    let service = LocalPrintService::new(dir.path());

    assert!(matches!(
        service.print(&document(), None).await,
        Err(PrintingFailure::NoPrinter)
    ));
}

#[tokio::test]
async fn test_print_to_unreachable_printer() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let service = LocalPrintService::new(dir.path()).with_timeout(Duration::from_secs(1));
    let target = PrinterHandle::new("Gone", Some(addr.to_string()));

    assert!(matches!(
        service.print(&document(), Some(&target)).await,
        Err(PrintingFailure::Printer(_))
    ));
}

#[tokio::test]
async fn test_export_writes_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("exports");
    let service = LocalPrintService::new(&export_dir);

    let first = service.export_to_file(&document()).await.unwrap();
    let second = service.export_to_file(&document()).await.unwrap();

    assert_eq!(first.content_type(), ContentType::Html);
    assert_ne!(first.path(), second.path());
    assert!(first.path().starts_with(&export_dir));
    assert!(first.uri().starts_with("file://"));

    let html = std::fs::read_to_string(first.path()).unwrap();
    assert!(html.contains("<p>Coffee: $2.50</p>"));
    assert!(html.contains("Total: $5.50</h6>"));
}
