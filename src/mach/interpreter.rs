use super::{Arg, Argument, Frame, Function, Halt, Io, Kind, Loop, Operation, Result, Runtime, Val};
use crate::error;
use crate::lang::token::*;
use crate::lang::{Error, Line, LineNumber, Scanner};
use std::convert::TryFrom;
use tracing::debug;

/// ## Parser-interpreter
///
/// Recursive descent over the scanner's tokens with one token of lookahead.
/// Every rule evaluates as it recognizes; nothing is built.
///
/// ```text
/// line       = statement END
/// statement  = ( label | STATEMENT ... | assignment ) [ ':' statement ]
/// expression = and { OR and }
/// and        = xor { AND xor }
/// xor        = bool_term { XOR bool_term }
/// bool_term  = NOT expression | comparison
/// comparison = arithmetic [ ( '=' | '<>' | '<' | '<=' | '>' | '>=' ) arithmetic ]
/// arithmetic = term { ( '+' | '-' ) term }
/// term       = factor { ( '*' | '/' | DIV | MOD ) factor }
/// factor     = ( '-' | '+' ) factor | '(' expression ')' | literal
///            | variable [ '(' expression ')' ] | function '(' args ')'
/// ```

pub struct Interpreter<'v, 's, T: Io> {
    vm: &'v mut Runtime<T>,
    source: &'s str,
    scanner: Scanner<'s>,
    look: Lexeme,
    line_number: Option<LineNumber>,
}

impl<'v, 's, T: Io> Interpreter<'v, 's, T> {
    /// Interprets a line as typed. A leading line number is consumed.
    pub fn new(vm: &'v mut Runtime<T>, source: &'s str) -> Result<Interpreter<'v, 's, T>> {
        let mut scanner = Scanner::new(source);
        let mut look = scanner.next_lexeme()?;
        let mut line_number = None;
        if let Token::LineNumber(n) = look.token {
            line_number = Some(n);
            look = scanner.next_lexeme()?;
        }
        Ok(Interpreter {
            vm,
            source,
            scanner,
            look,
            line_number,
        })
    }

    /// Interprets the stored text of program line `line_number`.
    pub fn at_line(
        vm: &'v mut Runtime<T>,
        source: &'s str,
        line_number: LineNumber,
    ) -> Result<Interpreter<'v, 's, T>> {
        Interpreter::fragment(vm, source, 0, Some(line_number))
    }

    fn fragment(
        vm: &'v mut Runtime<T>,
        source: &'s str,
        offset: usize,
        line_number: Option<LineNumber>,
    ) -> Result<Interpreter<'v, 's, T>> {
        let mut scanner = Scanner::at(source, offset);
        let look = scanner.next_lexeme()?;
        Ok(Interpreter {
            vm,
            source,
            scanner,
            look,
            line_number,
        })
    }

    pub fn interpret(&mut self) -> Result<()> {
        self.statement()?;
        self.expect(Token::End)
    }

    fn advance(&mut self) -> Result<Lexeme> {
        let next = self.scanner.next_lexeme()?;
        Ok(std::mem::replace(&mut self.look, next))
    }

    fn matches(&mut self, token: &Token) -> Result<bool> {
        if self.look.token == *token {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if self.matches(&token)? {
            Ok(())
        } else {
            Err(self.expected(token.describe()))
        }
    }

    fn expected(&self, name: &str) -> Halt {
        let found = match &self.look.token {
            Token::End => "END OF LINE".to_string(),
            token => format!("'{}'", token),
        };
        error!(SyntaxError, ..&self.look.position; format!("{} EXPECTED, BUT {} FOUND", name, found))
            .into()
    }

    fn expect_ident(&mut self) -> Result<String> {
        match &self.look.token {
            Token::Ident(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.expected("IDENTIFIER")),
        }
    }

    fn at_statement_end(&self) -> bool {
        matches!(self.look.token, Token::End | Token::Colon)
    }

    fn skip_line(&mut self) -> Result<()> {
        while !self.look.token.is_end() {
            self.advance()?;
        }
        Ok(())
    }

    /// Continues scanning at byte `offset` of the line.
    fn seek(&mut self, offset: usize) -> Result<()> {
        self.scanner = Scanner::at(self.source, offset);
        self.look = self.scanner.next_lexeme()?;
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        match self.look.token.clone() {
            Token::Statement(statement) => {
                self.advance()?;
                self.dispatch(statement)?;
            }
            Token::Ident(name) => {
                self.advance()?;
                if self.look.token == Token::Colon {
                    self.label(&name)?;
                    if self.look.token.is_end() {
                        return Ok(());
                    }
                    return self.statement();
                }
                let index = self.indexer()?;
                self.assignment(&name, index)?;
            }
            _ => return Err(self.expected("STATEMENT")),
        }
        if self.matches(&Token::Colon)? {
            self.statement()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, statement: Statement) -> Result<()> {
        use Statement::*;
        match statement {
            Debug => self.vm.debug(),
            Trace => self.trace(),
            Rem => self.rem(),
            Let => self.let_var(),
            Dim => self.dim(),
            Goto => self.goto(),
            Gosub => self.gosub(),
            Return => self.return_gosub(),
            Cls => self.vm.io.clear_screen(),
            Print => self.print(),
            Input => self.input(),
            New => {
                self.vm.new_program();
                Ok(())
            }
            List => self.list(),
            Read => self.read(),
            Write => self.write(),
            Load => self.load(),
            Save => self.save(),
            End => Err(Halt::End),
            Quit => Err(Halt::Quit),
            Run => {
                self.vm.reset()?;
                self.vm.run()
            }
            Reset => self.vm.reset(),
            Cont => self.cont(),
            If => self.if_then(),
            On => self.on(),
            For => self.for_loop(),
            Next => self.next(),
        }
    }

    fn label(&mut self, name: &str) -> Result<()> {
        self.expect(Token::Colon)?;
        if let Some(line_number) = self.line_number {
            self.vm.vars.write_num(name, 0, Val::Integer(line_number))?;
        }
        Ok(())
    }

    fn trace(&mut self) -> Result<()> {
        if !self.at_statement_end() {
            self.vm.context.trace = self.bool_expression()?;
        }
        let state = if self.vm.context.trace { "ON" } else { "OFF" };
        self.vm.io.print_msg(&format!("TRACE IS: {}", state), true)
    }

    fn rem(&mut self) -> Result<()> {
        let comment = match &self.look.token {
            Token::Comment(s) => s.clone(),
            _ => return Err(self.expected("COMMENT")),
        };
        self.advance()?;
        if self.vm.context.trace {
            self.vm
                .io
                .print_msg(&format!("COMMENT: \"{}\"", comment), true)?;
        }
        Ok(())
    }

    fn let_var(&mut self) -> Result<()> {
        let (name, index) = self.variable()?;
        self.assignment(&name, index)
    }

    fn assignment(&mut self, name: &str, index: i64) -> Result<()> {
        self.expect(Token::Equal)?;
        match Kind::of_name(name) {
            Kind::String => {
                let s = self.str_expression()?;
                self.vm.vars.write_str(name, index, s)?;
            }
            Kind::Numeric => {
                let val = self.num_expression()?;
                self.vm.vars.write_num(name, index, val)?;
            }
        }
        Ok(())
    }

    fn dim(&mut self) -> Result<()> {
        loop {
            let name = self.expect_ident()?;
            self.expect(Token::LParen)?;
            let dim = self.int_expression()?;
            self.expect(Token::RParen)?;
            self.vm.vars.dim(&name, dim, None)?;
            if !self.matches(&Token::Comma)? {
                return Ok(());
            }
        }
    }

    fn goto(&mut self) -> Result<()> {
        let line_number = self.int_expression()?;
        self.vm.context.jump_to(line_number)?;
        debug!(line_number, "goto");
        Ok(())
    }

    fn gosub(&mut self) -> Result<()> {
        let line_number = self.int_expression()?;
        let ip = self.vm.context.resolve(line_number)?;
        let ip_next = self.vm.context.ip_next;
        self.vm.context.stack.push(Frame::Return(ip_next))?;
        self.vm.context.ip_next = ip;
        debug!(line_number, return_ip = ip_next, "gosub");
        Ok(())
    }

    fn return_gosub(&mut self) -> Result<()> {
        let ip = match self.vm.context.stack.last() {
            Some(Frame::Return(ip)) if *ip < self.vm.context.max_ip() => *ip,
            Some(Frame::Return(ip)) => {
                return Err(error!(ReturnWithoutGosub; format!("{} IS NOT A VALID IP", ip)).into())
            }
            Some(Frame::Loop(_)) => {
                return Err(error!(ReturnWithoutGosub; "STACK TOP IS A LOOP").into())
            }
            None => return Err(error!(ReturnWithoutGosub; "STACK IS EMPTY").into()),
        };
        self.vm.context.stack.pop();
        self.vm.context.ip_next = ip;
        debug!(ip, "return");
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        let mut message = String::new();
        let mut newline = true;
        while !self.at_statement_end() {
            newline = true;
            message.push_str(&self.expression()?.to_string());
            if self.matches(&Token::Comma)? {
                newline = false;
            } else if self.matches(&Token::Semicolon)? {
                newline = false;
                message.push(' ');
            } else {
                break;
            }
        }
        self.vm.io.print_msg(&message, newline)
    }

    fn input(&mut self) -> Result<()> {
        let mut prompt = self.str_expression()?;
        if self.matches(&Token::Semicolon)? {
            prompt.push('?');
        } else {
            self.expect(Token::Comma)?;
        }
        let (name, index) = self.variable()?;
        match Kind::of_name(&name) {
            Kind::String => {
                let s = self.vm.io.input_str(&prompt)?;
                self.vm.vars.write_str(&name, index, s)?;
            }
            Kind::Numeric => {
                let n = self.vm.io.input_int(&prompt)?;
                self.vm.vars.write_num(&name, index, Val::Integer(n))?;
            }
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let mut start = None;
        let mut end = None;
        if !self.at_statement_end() {
            start = Some(self.int_expression()?);
            if self.matches(&Token::Comma)? {
                end = Some(self.int_expression()?);
            }
        }
        for line in self.vm.listing.program_text(start, end) {
            self.vm.io.print_msg(&line, true)?;
        }
        self.vm.io.print_msg("DONE", true)
    }

    fn read(&mut self) -> Result<()> {
        let name = self.expect_ident()?;
        self.expect(Token::Comma)?;
        let file = self.str_expression()?;
        let lines = self
            .vm
            .io
            .read_lines(&file)?
            .into_iter()
            .map(|s| s.trim_end().to_string())
            .collect();
        self.vm.vars.write_str_array(&name, lines)?;
        Ok(())
    }

    fn write(&mut self) -> Result<()> {
        let name = self.expect_ident()?;
        let dim = self.vm.vars.get_dim(&name)?;
        self.expect(Token::Comma)?;
        let file = self.str_expression()?;
        let mut text = String::new();
        for i in 0..dim {
            text.push_str(&self.vm.vars.read_str(&name, i as i64)?);
        }
        self.vm.io.write_text(&file, &text)
    }

    fn load(&mut self) -> Result<()> {
        let file = self.str_expression()?;
        let lines = self.vm.io.read_lines(&file)?;
        let stored = self.vm.listing.set_text(lines.as_slice())?;
        debug!(file = file.as_str(), stored, "program loaded");
        self.vm.io.print_msg(
            &format!("PROGRAM LOADED: {}, {} LINES", file, lines.len()),
            true,
        )
    }

    fn save(&mut self) -> Result<()> {
        let file = self.str_expression()?;
        let mut text = String::new();
        for line in self.vm.listing.program_text(None, None) {
            text.push_str(&line);
            text.push('\n');
        }
        self.vm.io.write_text(&file, &text)?;
        debug!(file = file.as_str(), "program stored");
        self.vm
            .io
            .print_msg(&format!("PROGRAM STORED INTO {}", file), true)
    }

    fn cont(&mut self) -> Result<()> {
        if !self.vm.context.in_range() {
            return Err(error!(CantContinue).into());
        }
        self.vm.run()
    }

    fn if_then(&mut self) -> Result<()> {
        if !self.bool_expression()? {
            return self.skip_line();
        }
        if self.matches(&Token::Statement(Statement::Goto))? {
            return self.goto();
        }
        if let Token::Literal(_) = self.look.token {
            return self.goto();
        }
        self.expect(Token::Keyword(Keyword::Then))?;
        if let Token::Literal(_) = self.look.token {
            return self.goto();
        }
        self.statement()
    }

    /// The target is only evaluated when the condition holds. Otherwise the
    /// rest of the line is skipped.
    fn on(&mut self) -> Result<()> {
        let condition = self.bool_expression()?;
        self.expect(Token::Statement(Statement::Goto))?;
        if !condition {
            return self.skip_line();
        }
        let line_number = self.int_expression()?;
        self.vm.context.jump_to(line_number)?;
        debug!(line_number, "on goto");
        Ok(())
    }

    fn for_loop(&mut self) -> Result<()> {
        let (variable, index) = self.variable()?;
        if Kind::of_name(&variable) != Kind::Numeric {
            return Err(error!(TypeMismatch; format!("{} IS NOT A NUMERIC VARIABLE", variable)).into());
        }
        self.expect(Token::Equal)?;
        let start = self.int_expression()?;
        self.expect(Token::Keyword(Keyword::To))?;
        let limit = self.int_expression()?;
        let step = if self.matches(&Token::Keyword(Keyword::Step))? {
            self.int_expression()?
        } else {
            1
        };
        if step == 0 {
            return Err(error!(IllegalFunctionCall; "STEP 0").into());
        }
        let l = Loop {
            variable,
            index,
            start: self.vm.context.ip_next,
            limit,
            step,
        };
        if self.look.token == Token::Colon {
            let body_offset = self.look.position.offset + 1;
            return self.inline_loop(l, start, body_offset);
        }
        if !self.look.token.is_end() {
            return Err(self.expected("':' OR END OF LINE"));
        }
        self.vm.vars.write_num(&l.variable, index, Val::Integer(start))?;
        if l.within_limit(&Val::Integer(start)) {
            self.vm.context.stack.push(Frame::Loop(l))?;
            return Ok(());
        }
        let ip = self.find_next_line(&l.variable)?;
        self.vm.context.ip_next = ip + 1;
        Ok(())
    }

    /// Runs the rest of the line up to the matching `NEXT` once per
    /// iteration, then continues after that `NEXT`.
    fn inline_loop(&mut self, l: Loop, start: i64, body_offset: usize) -> Result<()> {
        let (body_end, resume) = self.find_inline_next(&l.variable, body_offset)?;
        let source = self.source;
        let body = source[..body_end].trim_end();
        let body = body.strip_suffix(':').unwrap_or(body);
        let has_body = body
            .get(body_offset..)
            .map_or(false, |b| !b.trim().is_empty());
        let mut value = start;
        while l.within_limit(&Val::Integer(value)) {
            self.vm.vars.write_num(&l.variable, l.index, Val::Integer(value))?;
            if has_body {
                Interpreter::fragment(self.vm, body, body_offset, self.line_number)?.interpret()?;
            }
            value = match value.checked_add(l.step) {
                Some(value) => value,
                None => break,
            };
        }
        match resume {
            Some(offset) => self.seek(offset),
            None => self.skip_line(),
        }
    }

    /// Finds the `NEXT` closing an inline loop. Returns where the body ends
    /// and where to resume after `NEXT [v]`, if there is such a `NEXT`.
    fn find_inline_next(&self, variable: &str, offset: usize) -> Result<(usize, Option<usize>)> {
        let mut scanner = Scanner::at(self.source, offset);
        let mut depth = 0;
        loop {
            let lexeme = scanner.next_lexeme()?;
            match lexeme.token {
                Token::End => return Ok((self.source.len(), None)),
                Token::Statement(Statement::For) => depth += 1,
                Token::Statement(Statement::Next) => {
                    let after = scanner.next_lexeme()?;
                    let named = match &after.token {
                        Token::Ident(name) => Some(name.clone()),
                        _ => None,
                    };
                    if depth > 0 {
                        depth -= 1;
                        continue;
                    }
                    match named {
                        None => return Ok((lexeme.position.offset, Some(after.position.offset))),
                        Some(name) if name == variable => {
                            let resume = scanner.next_lexeme()?.position.offset;
                            return Ok((lexeme.position.offset, Some(resume)));
                        }
                        Some(_) => {}
                    }
                }
                _ => {}
            }
        }
    }

    /// Finds the program line holding the `NEXT` for a loop that runs zero
    /// times. Loops opened and closed in between are skipped over.
    fn find_next_line(&self, variable: &str) -> Result<usize> {
        let context = &self.vm.context;
        if self.line_number.is_some() {
            let mut depth = 0;
            for ip in context.ip + 1..context.max_ip() {
                let text = match context
                    .line_number_at(ip)
                    .and_then(|n| self.vm.listing.get(n))
                {
                    Some(text) => text,
                    None => continue,
                };
                let line = match Line::new(text) {
                    Ok(line) => line,
                    Err(_) => continue,
                };
                let tokens: Vec<&Token> = line.tokens().collect();
                let mut inline = 0;
                for (i, token) in tokens.iter().enumerate() {
                    match token {
                        Token::Statement(Statement::For) => {
                            if tokens[i..].contains(&&Token::Colon) {
                                inline += 1;
                            } else {
                                depth += 1;
                            }
                        }
                        Token::Statement(Statement::Next) => {
                            if inline > 0 {
                                inline -= 1;
                            } else if depth > 0 {
                                depth -= 1;
                            } else {
                                match tokens.get(i + 1) {
                                    Some(Token::Ident(name)) if name != variable => {}
                                    _ => return Ok(ip),
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        Err(error!(ForWithoutNext; variable.to_string()).into())
    }

    fn next(&mut self) -> Result<()> {
        let name = match &self.look.token {
            Token::Ident(name) => Some(name.clone()),
            _ => None,
        };
        if name.is_some() {
            self.advance()?;
        }
        // Frames above the matching loop are dropped only once it is found.
        let mut skip = None;
        for (i, frame) in self.vm.context.stack.iter().rev().enumerate() {
            match frame {
                Frame::Return(_) => break,
                Frame::Loop(l) => {
                    if name.as_ref().map_or(true, |name| *name == l.variable) {
                        skip = Some(i);
                        break;
                    }
                }
            }
        }
        let skip = match skip {
            Some(skip) => skip,
            None => return Err(self.next_without_for(&name)),
        };
        for _ in 0..skip {
            self.vm.context.stack.pop();
        }
        let l = match self.vm.context.stack.pop() {
            Some(Frame::Loop(l)) => l,
            _ => return Err(error!(InternalError; "LOOP FRAME VANISHED").into()),
        };
        let value = self.vm.vars.read_num(&l.variable, l.index)?;
        let value = Operation::sum(value, Val::Integer(l.step))?;
        if l.within_limit(&value) {
            self.vm.vars.write_num(&l.variable, l.index, value)?;
            self.vm.context.ip_next = l.start;
            self.vm.context.stack.push(Frame::Loop(l))?;
        }
        Ok(())
    }

    fn next_without_for(&self, name: &Option<String>) -> Halt {
        match name {
            Some(name) => error!(NextWithoutFor; name.clone()).into(),
            None => error!(NextWithoutFor).into(),
        }
    }

    fn variable(&mut self) -> Result<(String, i64)> {
        let name = self.expect_ident()?;
        let index = self.indexer()?;
        Ok((name, index))
    }

    fn indexer(&mut self) -> Result<i64> {
        if !self.matches(&Token::LParen)? {
            return Ok(0);
        }
        let index = self.int_expression()?;
        self.expect(Token::RParen)?;
        Ok(index)
    }

    fn int_expression(&mut self) -> Result<i64> {
        Ok(i64::try_from(self.expression()?)?)
    }

    fn num_expression(&mut self) -> Result<Val> {
        let val = self.expression()?;
        if !val.is_numeric() {
            return Err(error!(TypeMismatch; "NUMERIC EXPRESSION EXPECTED").into());
        }
        Ok(val)
    }

    fn str_expression(&mut self) -> Result<String> {
        Ok(String::try_from(self.expression()?)?)
    }

    fn bool_expression(&mut self) -> Result<bool> {
        Ok(self.expression()?.is_truthy()?)
    }

    fn expression(&mut self) -> Result<Val> {
        let mut lhs = self.and()?;
        while self.matches(&Token::BoolOp(BoolOperator::Or))? {
            let rhs = self.and()?;
            lhs = Operation::or(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Val> {
        let mut lhs = self.xor()?;
        while self.matches(&Token::BoolOp(BoolOperator::And))? {
            let rhs = self.xor()?;
            lhs = Operation::and(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn xor(&mut self) -> Result<Val> {
        let mut lhs = self.bool_term()?;
        while self.matches(&Token::BoolOp(BoolOperator::Xor))? {
            let rhs = self.bool_term()?;
            lhs = Operation::xor(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn bool_term(&mut self) -> Result<Val> {
        if self.matches(&Token::BoolOp(BoolOperator::Not))? {
            let val = self.expression()?;
            return Ok(Operation::not(val)?);
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Val> {
        let lhs = self.arithmetic()?;
        let op: fn(Val, Val) -> std::result::Result<Val, Error> = match self.look.token {
            Token::Equal => Operation::equal,
            Token::Comparison(Comparison::NotEqual) => Operation::not_equal,
            Token::Comparison(Comparison::Less) => Operation::less,
            Token::Comparison(Comparison::LessEqual) => Operation::less_equal,
            Token::Comparison(Comparison::Greater) => Operation::greater,
            Token::Comparison(Comparison::GreaterEqual) => Operation::greater_equal,
            _ => return Ok(lhs),
        };
        self.advance()?;
        let rhs = self.arithmetic()?;
        Ok(op(lhs, rhs)?)
    }

    fn arithmetic(&mut self) -> Result<Val> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.look.token {
                Token::AddOp(op) => op,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.term()?;
            lhs = match op {
                AddOp::Plus => Operation::sum(lhs, rhs)?,
                AddOp::Minus => Operation::subtract(lhs, rhs)?,
            };
        }
    }

    fn term(&mut self) -> Result<Val> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.look.token {
                Token::MulOp(op) => op,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.factor()?;
            lhs = match op {
                MulOp::Multiply => Operation::multiply(lhs, rhs)?,
                MulOp::Divide => Operation::divide(lhs, rhs)?,
                MulOp::Div => Operation::divide_int(lhs, rhs)?,
                MulOp::Mod => Operation::modulus(lhs, rhs)?,
            };
        }
    }

    fn factor(&mut self) -> Result<Val> {
        match self.look.token.clone() {
            Token::AddOp(AddOp::Minus) => {
                self.advance()?;
                let val = self.factor()?;
                Ok(Operation::negate(val)?)
            }
            Token::AddOp(AddOp::Plus) => {
                self.advance()?;
                let val = self.factor()?;
                if !val.is_numeric() {
                    return Err(error!(TypeMismatch).into());
                }
                Ok(val)
            }
            Token::LParen => {
                self.advance()?;
                let val = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(val)
            }
            Token::Literal(n) => {
                self.advance()?;
                Ok(Val::Integer(n))
            }
            Token::StringLiteral(s) => {
                self.advance()?;
                Ok(Val::String(s))
            }
            Token::Ident(name) => {
                self.advance()?;
                let index = self.indexer()?;
                Ok(self.vm.vars.read_var(&name, index)?)
            }
            Token::Function(func) => {
                self.advance()?;
                self.function(func)
            }
            _ => Err(self.expected("EXPRESSION")),
        }
    }

    fn function(&mut self, func: crate::lang::token::Function) -> Result<Val> {
        let signature = Function::signature(func);
        self.expect(Token::LParen)?;
        let mut args = vec![];
        while self.look.token != Token::RParen {
            let arg = match signature.arg(args.len()) {
                Some(arg) => arg,
                None => {
                    return Err(error!(IllegalFunctionCall; format!("TOO MANY ARGUMENTS FOR {}", func))
                        .into())
                }
            };
            args.push(match arg {
                Arg::Any => Argument::Val(self.expression()?),
                Arg::String => Argument::Val(Val::String(self.str_expression()?)),
                Arg::Int => Argument::Val(Val::Integer(self.int_expression()?)),
                Arg::Handle => {
                    let name = self.expect_ident()?;
                    Argument::Handle(self.vm.vars.handle(&name)?)
                }
            });
            if self.look.token != Token::RParen {
                self.expect(Token::Comma)?;
            }
        }
        let val = Function::call(func, args)?;
        self.expect(Token::RParen)?;
        Ok(val)
    }
}
